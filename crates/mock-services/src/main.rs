//! butcher-admin
//!
//! 肉类配送后台定向营销的命令行入口。

use anyhow::Context;
use butcher_shared::AppConfig;
use butcher_shared::observability;
use clap::Parser;
use mock_services::cli::{Cli, CommandRunner, Commands, OfferRequest};

const SERVICE_NAME: &str = "butcher-admin";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(SERVICE_NAME).context("加载配置失败")?;
    // 命令行参数优先于配置文件，RUST_LOG 又优先于两者
    if let Some(level) = cli.log_level.clone() {
        config.observability.log_level = level;
    }
    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config, cli.no_delay);

    match cli.command {
        Commands::Filter { source, filters } => {
            print!("{}", runner.run_filter(&source, filters).await?);
        }
        Commands::Customers { source, filters } => {
            print!("{}", runner.run_customers(&source, filters).await?);
        }
        Commands::Offer {
            source,
            filters,
            customers,
            select_all,
            select,
            offer_type,
            discount,
            validity_days,
        } => {
            let request = OfferRequest {
                customers,
                select_all,
                select,
                offer_type,
                discount,
                validity_days,
            };
            let confirmation = runner.run_offer(&source, filters, request).await?;
            println!("{}", confirmation.message);
            println!(
                "有效期至: {}",
                confirmation.valid_until.format("%Y-%m-%d %H:%M")
            );
        }
        Commands::Populate {
            customers,
            orders,
            seed,
            output,
        } => {
            let stats = runner.run_populate(customers, &orders, seed, output.as_deref())?;
            println!("\n数据生成完成:");
            println!("{}", "-".repeat(30));
            println!("客户数量: {}", stats.customers_count);
            println!("订单数量: {}", stats.orders_count);
            println!("订单总额: {:.2}", stats.revenue);
            println!("{}", "-".repeat(30));
        }
    }

    Ok(())
}
