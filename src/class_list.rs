//! CSS class list for the hero banner container.
//!
//! The base marker class is always present. Two authoring flags add layout
//! modifiers; a flag is on only when its value is exactly `"true"`.

use crate::properties::ValueMap;

pub const BASE_CLASS: &str = "we-HeroImage";
pub const FULL_WIDTH_CLASS: &str = "width-full";
pub const KEEP_RATIO_CLASS: &str = "ratio-16by9";

pub const PROP_FULL_WIDTH: &str = "useFullWidth";
pub const PROP_KEEP_RATIO: &str = "keepRatio";

/// Space-separated class list derived from the component configuration.
pub fn resolve_class_list(config: &ValueMap) -> String {
    let mut classes = String::from(BASE_CLASS);
    for (prop, class) in [
        (PROP_FULL_WIDTH, FULL_WIDTH_CLASS),
        (PROP_KEEP_RATIO, KEEP_RATIO_CLASS),
    ] {
        if config.get_or(prop, "") == "true" {
            classes.push(' ');
            classes.push_str(class);
        }
    }
    classes
}
