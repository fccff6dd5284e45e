//! Binary entrypoint for the browser-hosted component sandbox.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    earth_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `earth_app` for wasm32 with the `csr` feature."
    );
}
