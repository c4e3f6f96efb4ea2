use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

// Trunk post-build hook: make the wasm bindings load from relative URLs so the
// bundle can be served from any sub-path or embedded in an iframe.
fn main() -> io::Result<()> {
    //  Environment variable parameter - the distributed directory
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("TRUNK_STAGING_DIR: {err}")))?;

    //  Using the configured html output name (set in Trunk.toml)
    let staged_html_path = PathBuf::from(staging_dir).join("ParticleMorph.html");

    let html = fs::read_to_string(&staged_html_path)?;

    let html = html
        .replace("/particle-morph-engine.js", "./particle-morph-engine.js")
        .replace("/particle-morph-engine_bg.wasm", "./particle-morph-engine_bg.wasm");

    fs::write(staged_html_path, html)
}
