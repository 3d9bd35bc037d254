//! Initialize a sample project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing jungle project...");

    let routes_dir = Path::new("src/routes");
    if !routes_dir.exists() {
        fs::create_dir_all(routes_dir).context("Failed to create routes directory")?;
    }

    // Create default config
    let config_path = Path::new("jungle.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write jungle.toml")?;
        tracing::info!("Created jungle.toml");
    }

    // Create sample pages
    let home_path = routes_dir.join("Home.svelte");
    if !home_path.exists() || yes {
        fs::write(&home_path, DEFAULT_HOME).context("Failed to write Home.svelte")?;
        tracing::info!("Created src/routes/Home.svelte");
    }

    let about_path = routes_dir.join("About.svelte");
    if !about_path.exists() || yes {
        fs::write(&about_path, DEFAULT_ABOUT).context("Failed to write About.svelte")?;
        tracing::info!("Created src/routes/About.svelte");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'jungle serve' and visit /home/ to get started.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Jungle Configuration

[site]
# Directory scanned for page components
routes = "src/routes"

# Root for generated build workspaces
build_root = "jungle"

# Source extension for page components
extension = "svelte"

# Title stamped into every generated page
title = "Svelte app"
"#;

const DEFAULT_HOME: &str = r#"<script>
  document.title = 'Welcome home';
</script>

<main>
  <h1>Welcome home</h1>
  <p>This page was compiled from src/routes/Home.svelte.</p>
</main>

<style>
  h1 {
    color: #2d5a27;
  }

  main {
    max-width: 40rem;
    margin: 0 auto;
  }
</style>
"#;

const DEFAULT_ABOUT: &str = r#"<main>
  <h1>About</h1>
  <p>Every component in src/routes becomes a page under its own path.</p>
  <p><a href="/home/">Back home</a></p>
</main>
"#;
