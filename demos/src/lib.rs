// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Undersheet demos.
//!
//! [`ConsoleHost`] stands in for a browser page: it keeps a body class list
//! and a set of resize listeners in memory and prints every render.

use undersheet::{ResizeSubscription, SheetHost, SheetView};

/// In-memory host that prints what a page would apply.
#[derive(Debug)]
pub struct ConsoleHost {
    /// Visible viewport height.
    pub height: f64,
    /// Classes currently on the document body.
    pub body: Vec<&'static str>,
    /// Live resize listeners.
    pub listeners: Vec<ResizeSubscription>,
    next_listener: u64,
}

impl ConsoleHost {
    /// A page with a viewport `height` pixels tall.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            body: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl SheetHost for ConsoleHost {
    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn add_body_class(&mut self, class: &'static str) {
        if !self.body.contains(&class) {
            self.body.push(class);
        }
        println!("  body += {class}");
    }

    fn remove_body_class(&mut self, class: &'static str) {
        self.body.retain(|c| *c != class);
        println!("  body -= {class}");
    }

    fn subscribe_resize(&mut self) -> ResizeSubscription {
        self.next_listener += 1;
        let subscription = ResizeSubscription(self.next_listener);
        self.listeners.push(subscription);
        println!("  resize listener {subscription:?} added");
        subscription
    }

    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription) {
        self.listeners.retain(|s| *s != subscription);
        println!("  resize listener {subscription:?} removed");
    }

    fn render(&mut self, view: &SheetView) {
        println!(
            "  r{:<3} <div class=\"{}\"><div class=\"{}\" style=\"{}\"><div class=\"{}\"><div class=\"{}\">",
            view.revision,
            view.overlay_classes(),
            view.content_classes(),
            view.style(),
            view.handle_container_classes(),
            view.handle_classes()
        );
    }
}

/// Routes `log` output through `env_logger`, defaulting to `debug`.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .try_init();
}
