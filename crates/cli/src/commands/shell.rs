use anyhow::{Result, bail};
use dishpick_client::{DishClient, Shell};
use dishpick_core::DishName;

async fn open(url: &str) -> Result<Shell> {
    let mut shell = Shell::new(DishClient::new(url)?);
    shell.load().await;
    Ok(shell)
}

fn print_dishes(shell: &Shell) {
    if shell.dishes().is_empty() {
        println!("(no dishes yet)");
        return;
    }
    for (index, dish) in shell.dishes().iter().enumerate() {
        println!("{:>3}. {dish}", index + 1);
    }
}

/// Turns the shell's error banner into the command's exit status.
fn finish(shell: &Shell, ok: bool) -> Result<()> {
    if ok {
        print_dishes(shell);
        return Ok(());
    }
    match shell.error() {
        Some(message) => bail!("{message}"),
        None => bail!("nothing was changed"),
    }
}

pub(crate) async fn list(url: &str) -> Result<()> {
    let shell = open(url).await?;
    if let Some(message) = shell.error() {
        bail!("{message}");
    }
    print_dishes(&shell);
    Ok(())
}

pub(crate) async fn add(url: &str, name: &str) -> Result<()> {
    let name = DishName::new(name)?;
    let mut shell = open(url).await?;
    shell.set_input(name.as_str());
    let ok = shell.add().await;
    finish(&shell, ok)
}

pub(crate) async fn remove(url: &str, name: &str) -> Result<()> {
    let mut shell = open(url).await?;
    let ok = shell.remove(name).await;
    finish(&shell, ok)
}

pub(crate) async fn clear(url: &str, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("refusing to delete every dish without --yes");
    }
    let mut shell = open(url).await?;
    let ok = shell.clear().await;
    finish(&shell, ok)
}

pub(crate) async fn preset(url: &str) -> Result<()> {
    let mut shell = open(url).await?;
    let ok = shell.add_presets().await;
    finish(&shell, ok)
}

pub(crate) async fn pick(url: &str) -> Result<()> {
    let mut shell = open(url).await?;
    match shell.pick().await {
        Some(dish) => println!("🍽️  today: {dish}"),
        None => bail!("nothing to pick from"),
    }
    if let Some(message) = shell.error() {
        tracing::warn!("{message}");
    }
    Ok(())
}

pub(crate) async fn health(url: &str) -> Result<()> {
    let client = DishClient::new(url)?;
    tracing::debug!(url = client.base_url(), "querying health");
    let report = client.health().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
