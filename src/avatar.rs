//! User avatar display.
//!
//! URL building is kept apart from the DOM mutation: [`avatar_url`] is pure,
//! and [`change_image_file_name`] only touches the page through an
//! [`AvatarTarget`] handed in by the caller.

use std::fmt::Display;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::config::AvatarConfig;

#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Something able to show a user's avatar.
pub trait AvatarTarget {
    /// Makes the avatar container visible.
    fn show(&self) -> Result<(), DomError>;
    /// Points the nested image at `src`. A missing image is not an error.
    fn set_image_src(&self, src: &str) -> Result<(), DomError>;
}

/// The avatar container element: a block holding an `<img>` as direct child.
/// Only exercised in the browser; native tests go through a fake target.
#[derive(Debug, Clone)]
pub struct ImageContainer(pub HtmlElement);

impl AvatarTarget for ImageContainer {
    fn show(&self) -> Result<(), DomError> {
        self.0.style().set_property("display", "block")?;
        Ok(())
    }

    fn set_image_src(&self, src: &str) -> Result<(), DomError> {
        match self.0.query_selector(":scope > img")? {
            Some(img) => img.set_attribute("src", src)?,
            None => log::debug!("avatar container has no <img>, skipping"),
        }
        Ok(())
    }
}

/// `repository` followed by the string form of `user_id`. Nothing is escaped
/// and no separator is inserted.
pub fn avatar_url(repository: &str, user_id: impl Display) -> String {
    format!("{}{}", repository, user_id)
}

/// Shows `target` and loads the avatar of `user_id` into it. DOM failures are
/// logged and otherwise ignored.
pub fn change_image_file_name(config: &AvatarConfig, target: &impl AvatarTarget, user_id: impl Display) {
    let src = avatar_url(&config.repository, user_id);
    if let Err(err) = target.show().and_then(|_| target.set_image_src(&src)) {
        log::debug!("could not show avatar {}: {}", src, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeContainer {
        visible: Cell<bool>,
        src: RefCell<Option<String>>,
        src_writes: Cell<u32>,
        has_img: bool,
    }

    impl FakeContainer {
        fn with_img() -> Self {
            Self {
                has_img: true,
                ..Default::default()
            }
        }
    }

    impl AvatarTarget for FakeContainer {
        fn show(&self) -> Result<(), DomError> {
            self.visible.set(true);
            Ok(())
        }

        fn set_image_src(&self, src: &str) -> Result<(), DomError> {
            if self.has_img {
                *self.src.borrow_mut() = Some(src.to_string());
                self.src_writes.set(self.src_writes.get() + 1);
            }
            Ok(())
        }
    }

    struct BrokenContainer;

    impl AvatarTarget for BrokenContainer {
        fn show(&self) -> Result<(), DomError> {
            Err(DomError::Js("detached".into()))
        }

        fn set_image_src(&self, _src: &str) -> Result<(), DomError> {
            panic!("must not be reached after show() failed");
        }
    }

    #[test]
    fn test_avatar_url_is_plain_concatenation() {
        let base = "https://intranet.stxnext.pl/api/images/users/";
        assert_eq!(avatar_url(base, "42"), "https://intranet.stxnext.pl/api/images/users/42");
        assert_eq!(avatar_url(base, 42), "https://intranet.stxnext.pl/api/images/users/42");
        assert_eq!(avatar_url("/img", 7u32), "/img7");
        // No encoding.
        assert_eq!(avatar_url("/u/", "a b?c"), "/u/a b?c");
    }

    #[test]
    fn test_change_image_file_name_shows_and_sets_src() {
        let target = FakeContainer::with_img();
        change_image_file_name(&AvatarConfig::default(), &target, "42");
        assert!(target.visible.get());
        assert_eq!(
            target.src.borrow().as_deref(),
            Some("https://intranet.stxnext.pl/api/images/users/42")
        );
    }

    #[test]
    fn test_change_image_file_name_is_idempotent() {
        let target = FakeContainer::with_img();
        let config = AvatarConfig::default();
        change_image_file_name(&config, &target, 10);
        let once = (target.visible.get(), target.src.borrow().clone());
        change_image_file_name(&config, &target, 10);
        assert_eq!((target.visible.get(), target.src.borrow().clone()), once);
    }

    #[test]
    fn test_change_image_file_name_overwrites_previous_src() {
        let target = FakeContainer::with_img();
        let config = AvatarConfig {
            repository: "/avatars/".into(),
        };
        change_image_file_name(&config, &target, 10);
        change_image_file_name(&config, &target, 11);
        assert_eq!(target.src.borrow().as_deref(), Some("/avatars/11"));
        assert_eq!(target.src_writes.get(), 2);
    }

    #[test]
    fn test_missing_image_is_silent() {
        let target = FakeContainer::default();
        change_image_file_name(&AvatarConfig::default(), &target, 1);
        assert!(target.visible.get());
        assert!(target.src.borrow().is_none());
    }

    #[test]
    fn test_dom_failure_is_swallowed() {
        change_image_file_name(&AvatarConfig::default(), &BrokenContainer, 1);
    }
}
