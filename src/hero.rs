//! The hero image view-model handed to the page template.
//!
//! One instance is built per render from an explicit [`HeroDeps`] bundle.
//! Both outputs are computed on first read (or all at once by
//! [`HeroImageViewModel::activate`]) and then memoized for the life of the
//! instance:
//!
//! ```rust
//! use hero_image::context::{Component, RenderMode, RequestContext};
//! use hero_image::hero::{HeroDeps, HeroImageViewModel};
//! use hero_image::properties::ValueMap;
//! use hero_image::repository::MemoryRepository;
//!
//! let repo = MemoryRepository::new();
//! let component = Component::new(
//!     "/content/site/jcr:content/hero",
//!     ValueMap::new().with("useFullWidth", "true"),
//! );
//! let request = RequestContext::default();
//! let hero = HeroImageViewModel::new(HeroDeps {
//!     component: &component,
//!     resources: &repo,
//!     assets: &repo,
//!     request: &request,
//!     mode: RenderMode::Published,
//! });
//!
//! assert_eq!(hero.class_list(), "we-HeroImage width-full");
//! assert_eq!(hero.image().src(), "/content/site/jcr%3acontent/hero.img.jpeg");
//! ```

use serde::Serialize;
use std::cell::OnceCell;

use crate::class_list::resolve_class_list;
use crate::context::{Component, RenderMode, RequestContext};
use crate::image::{HeroImage, resolve_image};
use crate::metadata::resolve_reference;
use crate::repository::{AssetResolver, ResourceResolver};

/// Everything the view-model reads from its host.
#[derive(Clone, Copy)]
pub struct HeroDeps<'a> {
    pub component: &'a Component,
    pub resources: &'a dyn ResourceResolver,
    pub assets: &'a dyn AssetResolver,
    pub request: &'a RequestContext,
    pub mode: RenderMode,
}

pub struct HeroImageViewModel<'a> {
    deps: HeroDeps<'a>,
    class_list: OnceCell<String>,
    image: OnceCell<HeroImage>,
}

/// Serializable snapshot of an activated view-model.
#[derive(Debug, Serialize)]
pub struct HeroImageView<'v> {
    pub class_list: &'v str,
    pub image: &'v HeroImage,
}

impl<'a> HeroImageViewModel<'a> {
    pub fn new(deps: HeroDeps<'a>) -> Self {
        Self {
            deps,
            class_list: OnceCell::new(),
            image: OnceCell::new(),
        }
    }

    /// Resolve both outputs up front.
    pub fn activate(&self) -> HeroImageView<'_> {
        HeroImageView {
            class_list: self.class_list(),
            image: self.image(),
        }
    }

    /// CSS classes for the banner container.
    pub fn class_list(&self) -> &str {
        self.class_list
            .get_or_init(|| resolve_class_list(self.deps.component.properties()))
    }

    /// The banner image. Repeated calls return the same value.
    pub fn image(&self) -> &HeroImage {
        self.image.get_or_init(|| {
            let deps = &self.deps;
            let reference = resolve_reference(
                deps.component.properties(),
                deps.resources,
                deps.assets,
            );
            resolve_image(deps.component, reference.as_ref(), deps.request, deps.mode)
        })
    }

    pub fn mode(&self) -> RenderMode {
        self.deps.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::last_modified::JCR_LAST_MODIFIED;
    use crate::metadata::PROP_FILE_REFERENCE;
    use crate::properties::ValueMap;
    use crate::repository::{Asset, MemoryRepository, Resource};
    use crate::test_helpers::*;
    use std::cell::Cell;

    /// Counts resolver calls to prove memoization.
    struct CountingRepository {
        inner: MemoryRepository,
        lookups: Cell<usize>,
    }

    impl ResourceResolver for CountingRepository {
        fn get_resource(&self, path: &str) -> Option<Resource> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.get_resource(path)
        }
    }

    impl AssetResolver for CountingRepository {
        fn resolve_to_asset(&self, resource: &Resource) -> Option<Asset> {
            self.inner.resolve_to_asset(resource)
        }
    }

    fn published_props() -> ValueMap {
        ValueMap::new()
            .with(PROP_FILE_REFERENCE, HERO_ASSET_PATH)
            .with(JCR_LAST_MODIFIED, 1_700_000_000_000i64)
    }

    #[test]
    fn image_is_memoized() {
        let repo = CountingRepository {
            inner: sample_repository(),
            lookups: Cell::new(0),
        };
        let component = hero_component(published_props());
        let request = RequestContext::default();
        let hero = HeroImageViewModel::new(HeroDeps {
            component: &component,
            resources: &repo,
            assets: &repo,
            request: &request,
            mode: RenderMode::Published,
        });

        let first = hero.image();
        let second = hero.image();
        assert!(std::ptr::eq(first, second));
        assert_eq!(repo.lookups.get(), 1);
    }

    #[test]
    fn class_list_is_memoized() {
        let repo = sample_repository();
        let component = hero_component(ValueMap::new().with("keepRatio", "true"));
        let request = RequestContext::default();
        let hero = view_model(&component, &repo, &request, RenderMode::Published);

        assert!(std::ptr::eq(hero.class_list(), hero.class_list()));
        assert_eq!(hero.class_list(), "we-HeroImage ratio-16by9");
    }

    #[test]
    fn activate_resolves_both_outputs() {
        let repo = sample_repository();
        let component = hero_component(published_props());
        let request = RequestContext::new("/shop");
        let hero = view_model(&component, &repo, &request, RenderMode::Published);

        let view = hero.activate();
        assert_eq!(view.class_list, "we-HeroImage");
        assert_eq!(view.image.title(), Some("Summer Collection"));
        assert!(view.image.src().starts_with("/shop/"));
        assert!(std::ptr::eq(view.image, hero.image()));
    }

    #[test]
    fn authoring_mode_has_no_timestamp() {
        let repo = sample_repository();
        let component = hero_component(published_props());
        let request = RequestContext::default();
        let hero = view_model(&component, &repo, &request, RenderMode::Authoring);

        assert_eq!(
            hero.image().src(),
            "/content/we-retail/en/jcr%3acontent/hero.img.jpeg"
        );
        assert_eq!(hero.mode(), RenderMode::Authoring);
    }

    #[test]
    fn published_mode_has_timestamp() {
        let repo = sample_repository();
        let component = hero_component(published_props());
        let request = RequestContext::default();
        let hero = view_model(&component, &repo, &request, RenderMode::Published);

        assert!(hero.image().src().ends_with("/1700000000000.jpeg"));
    }

    #[test]
    fn dangling_reference_renders_without_title() {
        let repo = sample_repository();
        let component = hero_component(
            ValueMap::new().with(PROP_FILE_REFERENCE, "/content/dam/deleted.jpg"),
        );
        let request = RequestContext::default();
        let hero = view_model(&component, &repo, &request, RenderMode::Published);

        assert_eq!(hero.image().title(), None);
        assert!(!hero.image().src().is_empty());
    }

    #[test]
    fn view_serializes_to_json() {
        let repo = sample_repository();
        let component = hero_component(published_props());
        let request = RequestContext::default();
        let hero = view_model(&component, &repo, &request, RenderMode::Published);

        let json = serde_json::to_value(hero.activate()).unwrap();
        assert_eq!(json["class_list"], "we-HeroImage");
        assert_eq!(json["image"]["title"], "Summer Collection");
    }
}
