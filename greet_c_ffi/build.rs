// Copyright 2023 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Generates the greet.h header next to the built libgreet artifacts.
//! The crate version is stamped into the header.
use std::{env, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=src/c_api.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION is not set");

    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR environment variable not set");
    let profile_target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("Invalid OUT_DIR structure");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let config_path = Path::new(&crate_dir).join("cbindgen.toml");

    let mut config = cbindgen::Config::from_file(config_path).expect("invalid cbindgen.toml");

    config.header = match config.header {
        Some(ref mut header) => {
            header.push_str(&format!("\n// Version: {version}\n"));
            Some(header.clone())
        }
        None => Some(format!("\n// Version: {version}\n")),
    };

    cbindgen::generate_with_config(&crate_dir, config).map_or_else(
        |error| match error {
            cbindgen::Error::ParseSyntaxError { .. } => {
                println!("cargo:warning=ParseSyntaxError encountered while generating greet.h");
            }
            e => panic!("{e:?}"),
        },
        |bindings| {
            bindings.write_to_file(profile_target_dir.join("greet.h"));
        },
    );
}
