use clap::Parser;
use prize_draw::utils::{logger, validation::Validate};
use prize_draw::{
    Catalog, CliConfig, DrawError, DrawSettings, LocalStorage, PrizeDraw, Sampler, StdRandom,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting prize-draw");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = cli.resolve().unwrap_or_else(|e| fail(&e));

    // 驗證配置
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let catalog = Catalog::from_records(&settings.records).unwrap_or_else(|e| fail(&e));
    tracing::info!(
        "✅ Loaded {} prizes (total weight {})",
        catalog.len(),
        catalog.total_weight()
    );

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No draws will be made");
        display_catalog_summary(&catalog, &settings);
        return Ok(());
    }

    let rng = match settings.seed {
        Some(seed) => {
            tracing::info!("🔧 Using fixed seed {}", seed);
            StdRandom::seeded(seed)
        }
        None => StdRandom::from_entropy(),
    };

    let storage = LocalStorage::new(settings.output_path.as_str());
    let mut draw = PrizeDraw::new(Sampler::new(catalog, rng));

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let report = match draw.draw_and_save(&storage, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    // 寫檔失敗不視為致命錯誤
    if let Some(e) = &report.write_error {
        tracing::warn!("💡 Suggestion: {}", e.recovery_suggestion());
    }

    Ok(())
}

fn display_catalog_summary(catalog: &Catalog, settings: &DrawSettings) {
    println!("Prize pool ({} items, total weight {}):", catalog.len(), catalog.total_weight());
    for (item, odds) in catalog.odds() {
        println!("  {} ({:.1}%)", item, odds * 100.0);
    }
    println!("Output file: {}", settings.output_path);
    match settings.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }
}

fn fail(e: &DrawError) -> ! {
    tracing::error!(
        "❌ prize-draw failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
