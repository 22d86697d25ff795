/// Live tweak panel and the tunable scene parameters behind it.
pub mod debug_panel;
