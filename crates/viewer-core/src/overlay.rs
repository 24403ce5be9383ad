/// Handle returned by [`OverlayTimer::show`], passed back when its hide timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayTicket(u64);

/// Bookkeeping for the auto-hiding image overlay.
///
/// Every `show` bumps a generation counter. A hide timer armed by an older
/// show is ignored, so the overlay always stays up for the full delay after
/// the most recent image.
#[derive(Clone, Debug, Default)]
pub struct OverlayTimer {
    generation: u64,
    visible: bool,
    image: Option<String>,
}

impl OverlayTimer {
    pub fn show(&mut self, image: &str) -> OverlayTicket {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.image = Some(image.to_string());
        OverlayTicket(self.generation)
    }

    /// Returns true when the overlay should actually be hidden now.
    pub fn expire(&mut self, ticket: OverlayTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
