use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_provisioning_core::{
    events::{ConnectEvent, ScanEvent, UiEvent},
    types::{PasswordPolicy, ProvisioningState, ScanMethod},
    App,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<ScanEvent>()?;
    gen.register_type::<ConnectEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<ProvisioningState>()?;
    gen.register_type::<ScanMethod>()?;
    gen.register_type::<PasswordPolicy>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
