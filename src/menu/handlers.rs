use crate::component::{ClassRenamer, MappingViewer};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_class_renamer(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let config = Config::new()?;
    let renamer = ClassRenamer::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = renamer.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_mapping_viewer(term: &Term) -> Result<()> {
    let config = Config::new()?;
    let viewer = MappingViewer::new(config);

    if let Err(e) = viewer.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
