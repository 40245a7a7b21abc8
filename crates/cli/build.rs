use std::{env, fs, path::PathBuf};

use clap::CommandFactory;
use clap_complete::shells::{Bash, Fish, PowerShell, Zsh};

#[allow(dead_code)]
mod cli {
    include!("src/cli.rs");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = cli::Cli::command();

    clap_complete::generate_to(Bash, &mut cmd, "postsmith", &completions_dir).unwrap();
    clap_complete::generate_to(Zsh, &mut cmd, "postsmith", &completions_dir).unwrap();
    clap_complete::generate_to(Fish, &mut cmd, "postsmith", &completions_dir).unwrap();
    clap_complete::generate_to(PowerShell, &mut cmd, "postsmith", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
