use super::*;

#[test]
fn class_names_joins_enabled_parts_in_order() {
    assert_eq!(class_names([("w-full", true), ("px-4", true), ("max-w-md", true)]), "w-full px-4 max-w-md");
}

#[test]
fn class_names_skips_disabled_parts() {
    assert_eq!(class_names([("w-full", true), ("max-w-5xl", false), ("max-w-md", true)]), "w-full max-w-md");
}

#[test]
fn class_names_skips_blank_parts_and_trims() {
    assert_eq!(class_names([("  ", true), (" w-full ", true), ("", true)]), "w-full");
}

#[test]
fn class_names_empty_input_is_empty_string() {
    assert_eq!(class_names(std::iter::empty::<(&str, bool)>()), "");
    assert_eq!(class_names([("px-4", false)]), "");
}

#[test]
fn class_names_keeps_multi_class_fragments_intact() {
    assert_eq!(class_names([("flex items-center", true), ("py-12", true)]), "flex items-center py-12");
}
