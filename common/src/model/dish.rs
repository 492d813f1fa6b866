use serde::{Deserialize, Serialize};

/// A menu item as listed in the catalog.
///
/// Dishes are created once when the catalog is built and are only ever
/// cloned afterwards (into cart lines and order snapshots). When both
/// `image` and `video` are present the video wins for previews, while dish
/// cards keep showing the image as a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    pub name: String,
    /// Price in whole currency units.
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 3D model (glTF binary) for AR viewers. Carried through, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glb: Option<String>,
    /// 3D model (USDZ) for AR viewers. Carried through, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usdz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// What the preview modal should play or show for a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media<'a> {
    /// Looping, muted clip.
    Video(&'a str),
    /// Static picture.
    Image(&'a str),
}

impl Dish {
    /// Media for the preview modal: the video when there is one, otherwise the image.
    pub fn preview_media(&self) -> Option<Media<'_>> {
        self.video
            .as_deref()
            .map(Media::Video)
            .or_else(|| self.image.as_deref().map(Media::Image))
    }

    pub fn has_media(&self) -> bool {
        self.preview_media().is_some()
    }
}
