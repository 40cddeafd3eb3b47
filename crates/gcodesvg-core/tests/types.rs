#[path = "types/color_policy.rs"]
mod color_policy;
#[path = "types/toolpath.rs"]
mod toolpath;
