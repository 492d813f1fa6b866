use crate::model::dish::{Dish, Media};

/// Which dish, if any, is shown in the preview modal.
///
/// There is no stack: opening a preview replaces whatever was open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishPreview {
    current: Option<Dish>,
}

impl DishPreview {
    pub fn open(&mut self, dish: Dish) {
        self.current = Some(dish);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Dish> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Media to render for the open preview.
    pub fn media(&self) -> Option<Media<'_>> {
        self.current.as_ref().and_then(Dish::preview_media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn opening_replaces_previous_preview() {
        let catalog = Catalog::builtin();
        let mut preview = DishPreview::default();

        preview.open(catalog.get("dal_tadka").cloned().unwrap());
        preview.open(catalog.get("naan").cloned().unwrap());

        assert_eq!(preview.current().map(|d| d.id.as_str()), Some("naan"));
    }

    #[test]
    fn video_dish_never_renders_its_image() {
        let catalog = Catalog::builtin();
        let paneer = catalog.get("paneer_butter_masala").cloned().unwrap();
        let image = paneer.image.clone().unwrap();
        let video = paneer.video.clone().unwrap();
        let mut preview = DishPreview::default();

        preview.open(paneer);

        match preview.media() {
            Some(Media::Video(src)) => {
                assert_eq!(src, video);
                assert_ne!(src, image);
            }
            other => panic!("expected video media, got {other:?}"),
        }
    }

    #[test]
    fn close_returns_to_nothing_previewed() {
        let catalog = Catalog::builtin();
        let mut preview = DishPreview::default();
        preview.open(catalog.get("naan").cloned().unwrap());

        preview.close();

        assert!(!preview.is_open());
        assert_eq!(preview.media(), None);
    }
}
