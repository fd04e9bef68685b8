use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "markee";

fn write_completions(cmd: &mut Command, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    for &shell in Shell::value_variants() {
        generate_to(shell, cmd, BIN, dir)?;
    }
    Ok(())
}

/// Renders one man page. Subcommand pages are titled `markee-<name>`.
fn write_man_page(cmd: &Command, title: &str, dir: &Path) -> Result<()> {
    let mut page = Vec::new();
    Man::new(cmd.clone()).title(title).render(&mut page)?;

    let mut page = String::from_utf8_lossy(&page).into_owned();
    let name = cmd.get_name();
    if name != title {
        page = page.replace(&format!("{name} \\-"), &format!("{title} \\-"));
    }
    fs::write(dir.join(format!("{title}.1")), page)
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };
    let mut cmd = cli::Cli::command();
    write_completions(&mut cmd, &out_dir.join("completions"))?;

    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;
    write_man_page(&cmd, BIN, &man_dir)?;
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        write_man_page(sub, &format!("{BIN}-{}", sub.get_name()), &man_dir)?;
    }
    Ok(())
}
