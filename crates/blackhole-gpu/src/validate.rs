use blackhole_core::CompileError;

/// Entry point every fragment program must export.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Parse and validate WGSL fragment text without touching a device.
///
/// wgpu reports shader errors asynchronously through the uncaptured error
/// handler, by which time the old pipeline would already be gone. Checking up
/// front keeps a bad program from ever reaching `create_shader_module`.
pub fn validate_fragment(source: &str) -> Result<naga::Module, CompileError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| CompileError::Rejected(e.emit_to_string(source)))?;

    let has_entry = module
        .entry_points
        .iter()
        .any(|ep| ep.name == FRAGMENT_ENTRY && ep.stage == naga::ShaderStage::Fragment);
    if !has_entry {
        return Err(CompileError::Rejected(format!(
            "missing @fragment fn {FRAGMENT_ENTRY}"
        )));
    }

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|e| CompileError::Rejected(e.emit_to_string(source)))?;

    Ok(module)
}
