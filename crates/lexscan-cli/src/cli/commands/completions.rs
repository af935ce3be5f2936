//! `lexscan completions <shell>` and `lexscan man`.

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;
use std::io::Write;

pub fn run_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, out);
}

pub fn run_man(cmd: Command, out: &mut dyn Write) -> Result<()> {
    clap_mangen::Man::new(cmd).render(out)?;
    Ok(())
}
