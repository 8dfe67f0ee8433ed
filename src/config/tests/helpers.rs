//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::BonfireConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes a [`BonfireConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> BonfireConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    BonfireConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Builds a config with only the given username and password set.
pub fn config_with_login(username: Option<&str>, password: Option<&str>) -> BonfireConfig {
    BonfireConfig {
        username: username.map(ToOwned::to_owned),
        password: password.map(ToOwned::to_owned),
        ..BonfireConfig::default()
    }
}
