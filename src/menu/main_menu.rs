use crate::config::save::save_settings;
use crate::config::types::{Config, Language};
use crate::menu::handlers::{run_class_renamer, run_mapping_viewer};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_renamer"),
        t!("main_menu.opt_mapping"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_class_renamer(term, shutdown_signal)?;
            Ok(true)
        }
        Some(1) => {
            run_mapping_viewer(term)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_mapping_path"),
            t!("settings.opt_log_directory"),
            t!("settings.opt_extensions"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => edit_mapping_path(term, config)?,
            Some(1) => edit_log_directory(term, config)?,
            Some(2) => edit_extensions(term, config)?,
            Some(3) => show_language_menu(term, config)?,
            Some(4) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 對應表路徑設定
fn edit_mapping_path(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.mapping_path.title")).cyan().bold());

    // 顯示當前設定
    println!(
        "\n{} {}",
        style(t!("settings.mapping_path.current")).dim(),
        config.settings.mapping_path
    );
    println!();

    let path: String = Input::new()
        .with_prompt(t!("settings.mapping_path.prompt"))
        .interact_text()?;
    let path = path.trim().to_string();

    if path != config.settings.mapping_path {
        config.settings.mapping_path = path.clone();
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), path);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 記錄資料夾設定
fn edit_log_directory(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!(
        "{}",
        style(t!("settings.log_directory.title")).cyan().bold()
    );

    // 顯示當前設定
    println!(
        "\n{} {}",
        style(t!("settings.log_directory.current")).dim(),
        config.settings.log_directory
    );
    println!();

    let directory: String = Input::new()
        .with_prompt(t!("settings.log_directory.prompt"))
        .interact_text()?;
    let directory = directory.trim().to_string();

    if directory != config.settings.log_directory {
        config.settings.log_directory = directory.clone();
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), directory);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 掃描副檔名設定
fn edit_extensions(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.extensions.title")).cyan().bold());

    // 顯示當前設定
    println!(
        "\n{} {}",
        style(t!("settings.extensions.current")).dim(),
        config.settings.extensions.join(", ")
    );
    println!();

    let input: String = Input::new()
        .with_prompt(t!("settings.extensions.prompt"))
        .interact_text()?;

    // 逗號分隔，修剪空白，缺少開頭的點時自動補上
    let extensions: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            }
        })
        .collect();

    if extensions.is_empty() {
        println!("\n{}", style(t!("settings.extensions.empty")).yellow());
        std::thread::sleep(std::time::Duration::from_secs(1));
        return Ok(());
    }

    if extensions != config.settings.extensions {
        config.settings.extensions = extensions;
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            config.settings.extensions.join(", ")
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [
        Language::EnUs,
        Language::ZhTw,
        Language::ZhCn,
        Language::JaJp,
    ];

    let items: Vec<String> = languages.iter().map(|l: &Language| l.to_string()).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
