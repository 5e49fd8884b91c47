//! Media gallery selection state.
//!
//! Tracks which image of an ordered list is the main one on display.
//! Purely presentational: owns no entity data and never writes back.

use bikeversa_store::Bike;

/// Selection state over an ordered image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    active_index: usize,
}

impl Gallery {
    /// A gallery starting on the first image.
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            active_index: 0,
        }
    }

    /// Gallery for a bike, with the legacy single-image fallback.
    pub fn for_bike(bike: &Bike) -> Self {
        Self::new(bike.gallery_images())
    }

    /// Make the image at `index` active. No-op out of bounds.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.active_index = index;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The image currently on display, if there is one.
    pub fn active_image(&self) -> Option<&str> {
        self.images.get(self.active_index).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::new(vec!["a.png".into(), "b.png".into(), "c.png".into()])
    }

    #[test]
    fn starts_on_the_first_image() {
        assert_eq!(gallery().active_image(), Some("a.png"));
    }

    #[test]
    fn select_switches_within_bounds() {
        let mut g = gallery();
        g.select(2);
        assert_eq!(g.active_image(), Some("c.png"));
    }

    #[test]
    fn out_of_bounds_select_is_a_no_op() {
        let mut g = gallery();
        g.select(1);
        g.select(3);
        assert_eq!(g.active_index(), 1);
    }

    #[test]
    fn empty_gallery_has_no_active_image() {
        let mut g = Gallery::new(Vec::new());
        assert!(g.active_image().is_none());
        g.select(0);
        assert_eq!(g.active_index(), 0);
    }
}
