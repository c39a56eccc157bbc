//! debugstrip: strip debug-level logging statements from a source tree.
#![allow(clippy::multiple_crate_versions)]

fn main() -> std::io::Result<()> {
    debugstrip::cli::main()
}
