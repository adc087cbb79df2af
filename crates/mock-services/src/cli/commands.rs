//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 子命令对应后台的三个页面（看板订单、客户分析、会员回馈发券）以及数据填充。

use clap::{Args, Parser, Subcommand, ValueEnum};
use targeting_engine::{FilterState, OfferType};

/// 肉类配送后台命令行工具
///
/// 在模拟数据或数据集文件上执行筛选、客户分析和优惠发送。
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "butcher-admin")]
#[command(version, about = "肉类配送后台定向营销工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别，覆盖配置文件 (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 跳过模拟加载延迟
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 筛选订单（看板页）
    Filter {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// 按手机号聚合客户并筛选（客户分析页）
    Customers {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// 向筛选并选中的记录发送优惠（会员回馈页）
    Offer {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// 以客户为单位发送（默认以订单为单位）
        #[arg(long)]
        customers: bool,

        /// 选中筛选结果中的全部记录
        #[arg(long)]
        select_all: bool,

        /// 选中指定记录（订单号或手机号），可重复
        #[arg(short, long = "select")]
        select: Vec<String>,

        /// 优惠类型
        #[arg(short = 't', long, value_enum, default_value_t = OfferKind::Percentage)]
        offer_type: OfferKind,

        /// 优惠额度（百分比或金额）
        #[arg(short, long, default_value = "")]
        discount: String,

        /// 有效天数，缺省时使用配置中的默认值
        #[arg(long)]
        validity_days: Option<u32>,
    },

    /// 批量生成订单数据
    Populate {
        /// 客户数量
        #[arg(short, long, default_value = "20")]
        customers: usize,

        /// 每客户订单数量范围（格式：min-max）
        #[arg(long, default_value = "1-6")]
        orders: String,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 输出到文件（.json / .yaml）
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// 数据来源参数
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// 数据集文件（JSON/YAML），缺省时按配置生成模拟数据
    #[arg(short, long)]
    pub input: Option<String>,
}

/// 筛选输入框，与后台页面上的输入框一一对应
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 客户姓名（包含，不区分大小写）
    #[arg(long, default_value = "")]
    pub name: String,

    /// 手机号（包含）
    #[arg(long, default_value = "")]
    pub mobile: String,

    /// 金额条件，如 ">1000"、"<=500"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// 最近天数，如 "30"
    #[arg(long, default_value = "")]
    pub days: String,

    /// 商品品类，如 "Chicken"
    #[arg(long, default_value = "")]
    pub category: String,

    /// 订单数条件，如 ">2"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub order_count: String,
}

impl From<FilterArgs> for FilterState {
    fn from(args: FilterArgs) -> Self {
        FilterState {
            name: args.name,
            mobile: args.mobile,
            amount: args.amount,
            days: args.days,
            category: args.category,
            order_count: args.order_count,
        }
    }
}

/// 优惠类型参数
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    Percentage,
    FixedAmount,
    FreeDelivery,
}

impl From<OfferKind> for OfferType {
    fn from(kind: OfferKind) -> Self {
        match kind {
            OfferKind::Percentage => OfferType::Percentage,
            OfferKind::FixedAmount => OfferType::FixedAmount,
            OfferKind::FreeDelivery => OfferType::FreeDelivery,
        }
    }
}
