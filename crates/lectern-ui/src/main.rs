#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Lectern reader entry point; native builds only explain how to serve the page.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    lectern_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use lectern_ui::core::storage::{ARTICLE_STATE_KEY, FORM_STATE_KEY};
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    writeln!(
        stderr,
        "lectern-ui renders the article reader in a browser and keeps its \
         preferences in localStorage ({ARTICLE_STATE_KEY}, {FORM_STATE_KEY}).\n\
         Serve it with `trunk serve` from crates/lectern-ui."
    )
}
