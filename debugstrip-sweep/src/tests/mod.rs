
use debugstrip_core::debug;

/// Automatically enable debug output for all tests
#[ctor::ctor]
fn init_debug() {
    debug::set_debug(true);
}
