//! Browser entrypoint: mounts the landing page into `<body>`.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use landing_fx::{App, init_logging};
use leptos::mount::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
