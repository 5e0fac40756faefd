#[cfg(target_arch = "wasm32")]
mod nav_toggle;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod score_guard;

#[cfg(target_arch = "wasm32")]
fn main() {
    page::on_page_ready(|document| {
        nav_toggle::wire_nav_toggle(document);
        score_guard::wire_score_forms(document);
    });
}

// The page script only exists in the browser; the native binary is inert so
// the workspace still builds and tests on the host.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
