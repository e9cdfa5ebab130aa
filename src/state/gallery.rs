//! Candidate overlay images and the single active selection.
//!
//! Display order is newest-first. At most one image is active, and the
//! active handle is always the one bound in the [`TransformState`].

use std::rc::Rc;

use crate::error::OverlayError;
use crate::state::transform::TransformState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageHandle(pub u64);

/// Image data the browser can display directly as an `<img src>`. Shared,
/// since data URLs are large and the widget state is cloned per action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource(Rc<str>);

impl ImageSource {
    /// Accepts `data:image/...` URLs (what the file reader produces),
    /// `http(s)://` URLs and rooted paths (template images).
    pub fn parse(raw: &str) -> Result<Self, OverlayError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(OverlayError::DecodeFailed("empty image data".into()));
        }
        if let Some(rest) = raw.strip_prefix("data:") {
            let (meta, payload) = rest
                .split_once(',')
                .ok_or_else(|| OverlayError::DecodeFailed("malformed data URL".into()))?;
            if !meta.starts_with("image/") {
                let mime = meta.split(';').next().unwrap_or("");
                return Err(OverlayError::DecodeFailed(format!("not an image ({mime})")));
            }
            if payload.is_empty() {
                return Err(OverlayError::DecodeFailed("empty image data".into()));
            }
            return Ok(Self(Rc::from(raw)));
        }
        if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/') {
            return Ok(Self(Rc::from(raw)));
        }
        Err(OverlayError::DecodeFailed(format!(
            "unsupported image reference: {}",
            raw.chars().take(32).collect::<String>()
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: ImageHandle,
    pub source: ImageSource,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    next_id: u64,
}

impl Gallery {
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn active(&self) -> Option<&GalleryImage> {
        self.images.iter().find(|img| img.is_active)
    }

    pub fn get(&self, handle: ImageHandle) -> Option<&GalleryImage> {
        self.images.iter().find(|img| img.id == handle)
    }

    fn fresh_handle(&mut self) -> ImageHandle {
        self.next_id += 1;
        ImageHandle(self.next_id)
    }

    /// Insert at the front. The first image into an empty gallery becomes active.
    pub fn add_image(&mut self, source: ImageSource, transform: &mut TransformState) -> ImageHandle {
        let was_empty = self.images.is_empty();
        let id = self.fresh_handle();
        self.images.insert(
            0,
            GalleryImage {
                id,
                source,
                is_active: false,
            },
        );
        if was_empty {
            self.activate(id, transform);
        }
        id
    }

    /// Unknown handles are ignored and return false.
    pub fn activate(&mut self, handle: ImageHandle, transform: &mut TransformState) -> bool {
        if self.get(handle).is_none() {
            return false;
        }
        for img in &mut self.images {
            img.is_active = img.id == handle;
        }
        transform.bind_image(Some(handle));
        transform.reset();
        true
    }

    /// Hide the overlay but keep every image.
    pub fn deactivate(&mut self, transform: &mut TransformState) {
        for img in &mut self.images {
            img.is_active = false;
        }
        transform.bind_image(None);
    }

    pub fn clear_all(&mut self, transform: &mut TransformState) {
        self.images.clear();
        transform.bind_image(None);
        transform.reset();
    }

    /// Previously saved images go in front, in the order given, none activated.
    pub fn load_remote(&mut self, sources: Vec<ImageSource>) -> Vec<ImageHandle> {
        let mut fresh = Vec::with_capacity(sources.len());
        for source in sources {
            let id = self.fresh_handle();
            fresh.push(GalleryImage {
                id,
                source,
                is_active: false,
            });
        }
        let handles = fresh.iter().map(|img| img.id).collect();
        self.images.splice(0..0, fresh);
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(tag: &str) -> ImageSource {
        ImageSource::parse(&format!("data:image/png;base64,{tag}")).unwrap()
    }

    fn active_count(g: &Gallery) -> usize {
        g.images().iter().filter(|i| i.is_active).count()
    }

    #[test]
    fn parse_accepts_images_and_paths() {
        assert!(ImageSource::parse("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(ImageSource::parse("/static/templates/floorplan.png").is_ok());
        assert!(ImageSource::parse("https://cdn.example.org/t.png").is_ok());
    }

    #[test]
    fn parse_rejects_non_images() {
        for bad in ["", "   ", "data:text/plain;base64,aGk=", "data:image/png;base64,", "data:image/png", "C:\\x.png"] {
            assert!(
                matches!(ImageSource::parse(bad), Err(OverlayError::DecodeFailed(_))),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn first_image_auto_activates_later_ones_do_not() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        let a = g.add_image(src("A"), &mut ts);
        assert_eq!(g.active().map(|i| i.id), Some(a));
        assert_eq!(ts.bound(), Some(a));

        let b = g.add_image(src("B"), &mut ts);
        assert_eq!(g.active().map(|i| i.id), Some(a));
        assert_eq!(g.images()[0].id, b);
        assert_eq!(g.images()[1].id, a);
    }

    #[test]
    fn activate_unknown_handle_is_noop() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        let a = g.add_image(src("A"), &mut ts);
        ts.set_scale(2.0);
        let before = (g.clone(), ts.clone());
        assert!(!g.activate(ImageHandle(999), &mut ts));
        assert_eq!((g.clone(), ts.clone()), before);
        assert_eq!(ts.bound(), Some(a));
    }

    #[test]
    fn at_most_one_active_through_mixed_sequence() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        let mut handles = Vec::new();
        for step in 0..30u64 {
            match step % 5 {
                0 | 1 => handles.push(g.add_image(src(&step.to_string()), &mut ts)),
                2 | 3 => {
                    if let Some(h) = handles.get((step as usize * 7) % (handles.len().max(1))) {
                        g.activate(*h, &mut ts);
                    }
                }
                _ => {
                    if step % 10 == 9 {
                        g.clear_all(&mut ts);
                        handles.clear();
                    }
                }
            }
            assert!(active_count(&g) <= 1);
            assert_eq!(g.active().map(|i| i.id), ts.bound());
        }
    }

    #[test]
    fn clear_all_empties_and_unbinds() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        g.add_image(src("A"), &mut ts);
        g.add_image(src("B"), &mut ts);
        g.clear_all(&mut ts);
        assert!(g.is_empty());
        assert_eq!(ts.bound(), None);
        // next add is the first since empty again
        let c = g.add_image(src("C"), &mut ts);
        assert_eq!(ts.bound(), Some(c));
    }

    #[test]
    fn deactivate_keeps_images() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        g.add_image(src("A"), &mut ts);
        g.deactivate(&mut ts);
        assert_eq!(g.len(), 1);
        assert!(g.active().is_none());
        assert_eq!(ts.bound(), None);
    }

    #[test]
    fn load_remote_prepends_in_order_without_activating() {
        let mut g = Gallery::default();
        let mut ts = TransformState::default();
        let a = g.add_image(src("A"), &mut ts);
        let loaded = g.load_remote(vec![src("R1"), src("R2")]);
        let order: Vec<_> = g.images().iter().map(|i| i.source.as_str().to_string()).collect();
        assert_eq!(
            order,
            vec![
                "data:image/png;base64,R1",
                "data:image/png;base64,R2",
                "data:image/png;base64,A"
            ]
        );
        assert_eq!(loaded.len(), 2);
        assert_eq!(g.active().map(|i| i.id), Some(a));

        let mut empty = Gallery::default();
        empty.load_remote(vec![src("R")]);
        assert!(empty.active().is_none());
    }
}
