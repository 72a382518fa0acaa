// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use brunchbox::config::{load_and_validate_config, BuildPlan};
use brunchbox::observability::messages::plan::{BuildPlanReady, EnvironmentResolved};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <config file> [environment]", args[0]);
        eprintln!("Example: {} configs/elm-app.yaml production", args[0]);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let environment = args.get(2).map(String::as_str);

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("could not load '{}'", config_file))?;

    let resolved = match environment {
        Some(env_name) => {
            tracing::info!(
                "{}",
                EnvironmentResolved {
                    environment: env_name,
                    known: config.overrides.contains_key(env_name),
                }
            );
            config.resolve(env_name)
        }
        None => config,
    };

    let plan = BuildPlan::from_config(&resolved).map_err(|problems| {
        anyhow::anyhow!(
            "descriptor is not buildable:\n{}",
            problems
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        )
    })?;

    tracing::info!(
        "{}",
        BuildPlanReady {
            bundle_count: plan.bundles.len(),
            module_count: plan.compiler.main_modules.len(),
        }
    );

    println!("📋 Configuration: {}", config_file);
    if let Some(env_name) = environment {
        println!("🌍 Environment: {}", env_name);
    }
    println!("\n📦 Bundle targets:");
    for bundle in &plan.bundles {
        println!("  {} → {}", bundle.category, bundle.join_to);
    }
    println!("\n🔧 Compiler invocation:");
    println!("  {}", plan.compiler.command_line().join(" "));

    Ok(())
}
