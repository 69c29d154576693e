use anyhow::{Context, Result};
use log::{debug, info};
use markline::{Config, MarkdownRenderer};
use std::fs;
use std::io::{self, Read, Write};

/// Reads markdown source from the configured file or standard input.
fn read_input(config: &Config) -> Result<String> {
    match config.input_path() {
        Some(path) => {
            debug!("Reading markdown from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading markdown from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Writes the final HTML to the configured file or standard output.
fn write_output(config: &Config, html: &str) -> Result<()> {
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let markdown = read_input(config)?;
    debug!(
        "Rendering {} lines ({} bytes)",
        markdown.lines().count(),
        markdown.len()
    );

    let fragment = MarkdownRenderer::new().render(&markdown);
    let page_title = config.page_title();
    let html = markline::assemble(&fragment, config.title.as_deref(), page_title.as_deref());
    debug!(
        "Rendered fragment of {} bytes, output of {} bytes",
        fragment.len(),
        html.len()
    );

    write_output(config, &html)?;

    if config.open
        && let Some(path) = &config.output
    {
        open::that(path).with_context(|| format!("Failed to open {}", path.display()))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    run(&config)
}
