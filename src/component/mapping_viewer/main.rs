use crate::config::Config;
use crate::tools::load_mapping;
use anyhow::Result;
use console::style;
use log::info;
use std::path::Path;

/// 類別對應表檢視元件
pub struct MappingViewer {
    config: Config,
}

impl MappingViewer {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 檢視類別對應表 ===").cyan().bold());

        let mapping_path = Path::new(&self.config.settings.mapping_path);
        println!(
            "{}",
            style(format!("對應表: {}", mapping_path.display())).dim()
        );

        let mapping = load_mapping(mapping_path)?;

        if mapping.is_empty() {
            println!("{}", style("對應表沒有任何規則").yellow());
            return Ok(());
        }

        println!();
        for (index, rule) in mapping.rules().iter().enumerate() {
            println!(
                "  {} {} {} {}",
                style(format!("{}.", index + 1)).dim(),
                rule.old_class,
                style("→").dim(),
                rule.new_class
            );
        }

        println!();
        println!("{}", style(format!("共 {} 條規則", mapping.len())).green());

        info!("檢視對應表完成 - {} 條規則", mapping.len());

        Ok(())
    }
}
