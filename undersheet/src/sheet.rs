// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;
use log::{debug, trace};
use undersheet_gesture::TouchSession;
use undersheet_snap::{Release, Resolver, SnapPoints, Variant};

use crate::classes;
use crate::config::SheetConfig;
use crate::host::{PointerTarget, ResizeSubscription, SheetHost};
use crate::phase::Phase;
use crate::view::SheetView;

/// A mounted bottom sheet.
///
/// Owns its host for the whole mounted lifetime. Mounting locks page scroll
/// and, for viewport-aware variants, subscribes to viewport resizes; both are
/// released exactly once, by [`unmount`](Self::unmount) or on drop.
///
/// Every handler runs synchronously and re-renders the host at most once.
pub struct BottomSheet<H: SheetHost> {
    host: Option<H>,
    resolver: Resolver,
    touch: TouchSession,
    offset: f64,
    phase: Phase,
    on_close: Option<Box<dyn FnOnce()>>,
    scroll_locked: bool,
    resize: Option<ResizeSubscription>,
    revision: u64,
    dirty: bool,
}

impl<H: SheetHost> BottomSheet<H> {
    /// Mounts a sheet into `host`.
    ///
    /// `on_close` runs once, after the closing animation has finished.
    pub fn mount<C, F>(mut host: H, config: C, on_close: F) -> Self
    where
        C: Into<SheetConfig>,
        F: FnOnce() + 'static,
    {
        let resolver = Resolver::new(config.into().into_variant(), host.viewport_height());
        let offset = resolver.initial_offset();

        host.add_body_class(classes::SCROLL_LOCK);
        let resize = resolver
            .variant()
            .is_viewport_aware()
            .then(|| host.subscribe_resize());
        debug!(
            "sheet mounted: max height {}, offset {offset}, resize listener {resize:?}",
            resolver.max_height()
        );

        let mut sheet = Self {
            host: Some(host),
            resolver,
            touch: TouchSession::default(),
            offset,
            phase: Phase::Resting,
            on_close: Some(Box::new(on_close)),
            scroll_locked: true,
            resize,
            revision: 0,
            dirty: true,
        };
        sheet.commit();
        sheet
    }

    /// Releases the scroll lock and resize listener and returns the host.
    pub fn unmount(mut self) -> H {
        self.release();
        debug!("sheet unmounted");
        match self.host.take() {
            Some(host) => host,
            None => host_missing(),
        }
    }

    /// The host this sheet is mounted in.
    #[must_use]
    pub fn host(&self) -> &H {
        self.host.as_ref().unwrap_or_else(|| host_missing())
    }

    /// Mutable access to the host this sheet is mounted in.
    pub fn host_mut(&mut self) -> &mut H {
        self.host.as_mut().unwrap_or_else(|| host_missing())
    }

    /// Current downward translation, in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` once the sheet has started closing.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.phase.is_closing()
    }

    /// Returns `true` while the sheet animates to a snap point.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.phase.is_snapping()
    }

    /// Returns `true` once the close callback has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase.is_closing() && self.on_close.is_none()
    }

    /// Current viewport height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.resolver.max_height()
    }

    /// Current snap list, tallest first. Plain sheets only have `0`.
    #[must_use]
    pub fn snap_points(&self) -> &SnapPoints {
        self.resolver.snap_points()
    }

    /// The interaction mode.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        self.resolver.variant()
    }

    /// Bumped every time the presentation changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The presentation the host should show.
    #[must_use]
    pub fn view(&self) -> SheetView {
        SheetView {
            phase: self.phase,
            translate_y: self.offset,
            max_height: self
                .variant()
                .is_viewport_aware()
                .then(|| self.resolver.max_height()),
            revision: self.revision,
        }
    }

    /// A finger touched the handle at `pos`.
    ///
    /// Cancels any snap animation in progress. Ignored while closing.
    pub fn on_touch_start(&mut self, pos: Point) {
        if self.phase.is_closing() {
            trace!("touch start ignored while closing");
            return;
        }
        self.touch.start(pos);
        self.set_phase(Phase::Dragging);
        self.commit();
    }

    /// The finger moved to `pos`.
    pub fn on_touch_move(&mut self, pos: Point) {
        if !self.phase.is_dragging() {
            return;
        }
        let Some(step) = self.touch.update(pos) else {
            return;
        };
        let offset = self.resolver.on_move(self.offset, step.delta, step.total);
        self.set_offset(offset);
        self.commit();
    }

    /// The finger lifted.
    pub fn on_touch_end(&mut self) {
        if !self.phase.is_dragging() {
            return;
        }
        self.touch.end();
        match self.resolver.on_release(self.offset) {
            Release::Close => self.set_phase(Phase::Closing),
            Release::Settle(offset) => {
                self.set_offset(offset);
                self.set_phase(Phase::Resting);
            }
            Release::Snap { offset, .. } => {
                self.set_offset(offset);
                self.set_phase(Phase::Snapping);
            }
        }
        self.commit();
    }

    /// A click landed on `target`.
    ///
    /// Clicking the backdrop closes the sheet; clicks inside the sheet are
    /// left to its content.
    pub fn on_overlay_click(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Overlay => self.request_close(),
            PointerTarget::Sheet => trace!("click inside sheet ignored"),
        }
    }

    /// Starts closing the sheet, whatever it is doing.
    pub fn request_close(&mut self) {
        if self.phase.is_closing() {
            return;
        }
        self.touch.end();
        self.set_phase(Phase::Closing);
        self.commit();
    }

    /// The host finished an animation on the overlay.
    ///
    /// Runs the close callback the first time this is called after closing
    /// has started.
    pub fn on_animation_end(&mut self) {
        if !self.phase.is_closing() {
            return;
        }
        if let Some(on_close) = self.on_close.take() {
            debug!("sheet close animation finished");
            on_close();
        }
    }

    /// The host finished the sheet's snap transition.
    pub fn on_transition_end(&mut self) {
        if self.phase.is_snapping() {
            self.set_phase(Phase::Resting);
            self.commit();
        }
    }

    /// The viewport is now `height` pixels tall.
    pub fn on_viewport_resize(&mut self, height: f64) {
        let before = self.resolver.max_height();
        let offset = self.resolver.resize(height, self.offset);
        if self.resolver.max_height() != before {
            self.dirty = true;
        }
        self.set_offset(offset);
        self.commit();
    }

    fn set_offset(&mut self, offset: f64) {
        if offset != self.offset {
            self.offset = offset;
            self.dirty = true;
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            debug!("sheet phase {:?} -> {phase:?}", self.phase);
            self.phase = phase;
            self.dirty = true;
        }
    }

    fn commit(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.revision = self.revision.wrapping_add(1);
        let view = self.view();
        if let Some(host) = self.host.as_mut() {
            host.render(&view);
        }
    }

    fn release(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if let Some(subscription) = self.resize.take() {
            host.unsubscribe_resize(subscription);
        }
        if core::mem::take(&mut self.scroll_locked) {
            host.remove_body_class(classes::SCROLL_LOCK);
        }
    }
}

/// The host is only taken by `unmount`, which consumes the sheet.
#[cold]
fn host_missing() -> ! {
    unreachable!("bottom sheet host is present until unmount")
}

impl<H: SheetHost> Drop for BottomSheet<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: SheetHost> fmt::Debug for BottomSheet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomSheet")
            .field("phase", &self.phase)
            .field("offset", &self.offset)
            .field("resolver", &self.resolver)
            .field("touch", &self.touch)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
