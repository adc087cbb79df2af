//! 商品目录
//!
//! 店铺前台展示的肉类商品与分类。商品名里包含分类关键字，
//! 后台按品类筛选订单时就是在商品名上做子串匹配。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatCategory {
    Chicken,
    Mutton,
    Fish,
    Prawns,
    Eggs,
    Marinades,
}

impl MeatCategory {
    pub const ALL: [MeatCategory; 6] = [
        MeatCategory::Chicken,
        MeatCategory::Mutton,
        MeatCategory::Fish,
        MeatCategory::Prawns,
        MeatCategory::Eggs,
        MeatCategory::Marinades,
    ];

    /// 后台品类下拉框中的名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chicken => "Chicken",
            Self::Mutton => "Mutton",
            Self::Fish => "Fish",
            Self::Prawns => "Prawns",
            Self::Eggs => "Eggs",
            Self::Marinades => "Marinade",
        }
    }

    pub fn products(&self) -> impl Iterator<Item = &'static Product> + '_ {
        CATALOG.iter().filter(move |p| p.category == *self)
    }
}

impl fmt::Display for MeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub sku: &'static str,
    pub name: &'static str,
    pub category: MeatCategory,
    /// 单价（元）
    pub price: f64,
    /// 规格描述，如 "500 g"
    pub pack_size: &'static str,
}

pub static CATALOG: [Product; 14] = [
    Product { sku: "CHK-001", name: "Chicken Curry Cut", category: MeatCategory::Chicken, price: 260.0, pack_size: "500 g" },
    Product { sku: "CHK-002", name: "Chicken Breast Boneless", category: MeatCategory::Chicken, price: 310.0, pack_size: "450 g" },
    Product { sku: "CHK-003", name: "Chicken Wings", category: MeatCategory::Chicken, price: 180.0, pack_size: "500 g" },
    Product { sku: "MTN-001", name: "Mutton Curry Cut", category: MeatCategory::Mutton, price: 1070.0, pack_size: "1 kg" },
    Product { sku: "MTN-002", name: "Mutton Keema", category: MeatCategory::Mutton, price: 640.0, pack_size: "500 g" },
    Product { sku: "MTN-003", name: "Mutton Chops", category: MeatCategory::Mutton, price: 720.0, pack_size: "500 g" },
    Product { sku: "FSH-001", name: "Rohu Fish Steaks", category: MeatCategory::Fish, price: 336.0, pack_size: "500 g" },
    Product { sku: "FSH-002", name: "Seer Fish Fillet", category: MeatCategory::Fish, price: 890.0, pack_size: "500 g" },
    Product { sku: "PRW-001", name: "Tiger Prawns", category: MeatCategory::Prawns, price: 1500.0, pack_size: "500 g" },
    Product { sku: "PRW-002", name: "Prawns Medium Cleaned", category: MeatCategory::Prawns, price: 540.0, pack_size: "250 g" },
    Product { sku: "EGG-001", name: "Farm Eggs (12)", category: MeatCategory::Eggs, price: 120.0, pack_size: "12 pcs" },
    Product { sku: "EGG-002", name: "Country Eggs (6)", category: MeatCategory::Eggs, price: 96.0, pack_size: "6 pcs" },
    Product { sku: "MRN-001", name: "Tandoori Chicken Marinade", category: MeatCategory::Marinades, price: 349.0, pack_size: "450 g" },
    Product { sku: "MRN-002", name: "Peri Peri Fish Marinade", category: MeatCategory::Marinades, price: 399.0, pack_size: "400 g" },
];
