//! Test utilities

use std::{env, fmt::Debug, fs, path::PathBuf};

use alloy::providers::{DynProvider, Provider};
use alloy_primitives::Address;
use eyre::{eyre, Result};

/// Assert that two values are equal, returning an error rather than panicking
pub fn assert_eq_result<T: PartialEq + Debug>(actual: T, expected: T) -> Result<()> {
    if actual != expected {
        return Err(eyre!("expected {expected:?}, got {actual:?}"));
    }

    Ok(())
}

/// Assert that runtime code lives at the given address
pub async fn assert_code_at(provider: &DynProvider, address: Address) -> Result<()> {
    let code = provider.get_code_at(address).await?;
    if code.is_empty() {
        return Err(eyre!("no code at {address}"));
    }

    Ok(())
}

/// A scratch file path unique to this process
pub fn scratch_path(name: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}
