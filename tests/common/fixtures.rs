//! Test fixtures - a small storefront with a module, two themes and stored
//! updates.

use super::env::Storefront;

pub const MODULE: &str = "Vendor_Theme";
pub const BLANK: &str = "Vendor/blank";
pub const LUMA: &str = "Vendor/luma";

pub const DEFAULT_LAYOUT: &str = r#"<?xml version="1.0"?>
<page label="All Pages" type="page">
    <body>
        <container name="page.wrapper" label="Page Wrapper">
            <block name="header"/>
        </container>
    </body>
</page>
"#;

pub const PRODUCT_VIEW: &str = r#"<?xml version="1.0"?>
<page label="Product Page" type="page" parent="default">
    <update handle="catalog_product_opengraph"/>
    <body>
        <container name="content" label="Main Content Area">
            <block name="product.info"/>
        </container>
    </body>
</page>
"#;

pub const PRODUCT_OPENGRAPH: &str = r#"<?xml version="1.0"?>
<page>
    <head>
        <block name="opengraph"/>
    </head>
</page>
"#;

pub const PRODUCT_VIEW_SIMPLE: &str = r#"<?xml version="1.0"?>
<page label="Simple Product" type="page" parent="catalog_product_view">
    <body>
        <block name="product.info.simple"/>
    </body>
</page>
"#;

pub const CUSTOMER_ACCOUNT: &str = r#"<?xml version="1.0"?>
<page label="Customer My Account" design_abstraction="custom">
    <body>
        <container name="sidebar.main" label="Sidebar"/>
    </body>
</page>
"#;

pub const PAGE_EMPTY: &str = r#"<?xml version="1.0"?>
<layout label="Empty" design_abstraction="page_layout">
    <container name="root"/>
</layout>
"#;

pub const BLANK_DEFAULT: &str = r#"<?xml version="1.0"?>
<page>
    <body>
        <block name="logo" src="{{baseUrl}}logo.svg"/>
    </body>
</page>
"#;

pub const LUMA_PRODUCT_VIEW: &str = r#"<?xml version="1.0"?>
<page>
    <body>
        <referenceContainer name="content">
            <block name="luma.product.extra"/>
        </referenceContainer>
    </body>
</page>
"#;

pub const STORED_UPDATES: &str = r#"
[[updates]]
handle = "default"
theme_id = 2
store_id = 0
sort_order = 20
xml = '<block name="admin.banner"/>'

[[updates]]
handle = "default"
theme_id = 2
store_id = 1
sort_order = 10
xml = '<block name="admin.notice"/>'

[[updates]]
handle = "default"
theme_id = 2
store_id = 7
xml = '<block name="other.store"/>'
"#;

pub const CONFIG: &str = r#"
mode = "default"
installed = true
theme = "Vendor/luma"

[[themes]]
id = 1
code = "Vendor/blank"

[[themes]]
id = 2
code = "Vendor/luma"
parent = "Vendor/blank"

[store]
id = 1
base_url = "http://shop.test/"

[cache]
backend = "file"

[updates]
path = "var/layout_updates.toml"
"#;

/// Storefront with every fixture file and [`CONFIG`] written.
pub fn standard_storefront() -> Storefront {
    let shop = Storefront::new();
    shop.module_layout(MODULE, "frontend", "default", DEFAULT_LAYOUT);
    shop.module_layout(MODULE, "frontend", "catalog_product_view", PRODUCT_VIEW);
    shop.module_layout(MODULE, "frontend", "catalog_product_opengraph", PRODUCT_OPENGRAPH);
    shop.module_layout(
        MODULE,
        "frontend",
        "catalog_product_view_type_simple",
        PRODUCT_VIEW_SIMPLE,
    );
    shop.module_layout(MODULE, "frontend", "customer_account", CUSTOMER_ACCOUNT);
    shop.module_layout(MODULE, "base", "page_empty", PAGE_EMPTY);
    shop.theme_layout(BLANK, MODULE, "default", BLANK_DEFAULT);
    shop.theme_layout(LUMA, MODULE, "catalog_product_view", LUMA_PRODUCT_VIEW);
    shop.write("var/layout_updates.toml", STORED_UPDATES);
    shop.config(CONFIG);
    shop
}
