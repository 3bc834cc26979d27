use std::fs;
use std::path::PathBuf;

use boutique_store::app::catalog::model::ProductRecord;
use boutique_store::app::catalog::parser::parse_products;
use boutique_store::app::catalog::render::{
    escape_html, fill_placeholder, render_card, render_detail_page, render_gallery,
};
use boutique_store::app::catalog::service::CatalogService;
use boutique_store::app::forms::model::{ContactRequest, OrderRequest};
use boutique_store::app::forms::service::{format_contact_message, format_order_message};
use boutique_store::core::error::CoreError;

fn sample_record() -> ProductRecord {
    ProductRecord {
        id: "1".to_string(),
        name: "Red Dress".to_string(),
        price: "999".to_string(),
        img: r#"["a.jpg","b.jpg"]"#.to_string(),
        description: Some("Nice dress. Soft fabric.".to_string()),
    }
}

#[test]
fn test_parse_well_formed_blocks() {
    let raw = "id: 1\nname: Red Dress\nprice: 999\nimg: [\"a.jpg\"]\ndescription: Nice dress.\n---\nid: 2\nname: Blue Kurti\nprice: 749\nimg: [\"c.jpg\"]\n---\nid: 3\nname: Silk Scarf\nprice: 399\nimg: [\"d.jpg\"]";

    let products = parse_products(raw);

    // 三个完整区块解析出三条记录，且保持原始顺序
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].id, "1");
    assert_eq!(products[1].id, "2");
    assert_eq!(products[2].id, "3");
    assert_eq!(products[0].name, "Red Dress");
    assert_eq!(products[1].description, None);
}

#[test]
fn test_parse_drops_block_missing_required_field() {
    // 第二个区块缺少 price，应被静默丢弃
    let raw = "id: 1\nname: A\nprice: 10\nimg: [\"a.jpg\"]\n---\nid: 2\nname: B\nimg: [\"b.jpg\"]";

    let products = parse_products(raw);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "1");
}

#[test]
fn test_parse_drops_block_with_blank_required_field() {
    // price 只有空白，修剪后为空，同样丢弃
    let raw = "id: 1\nname: A\nprice:   \nimg: [\"a.jpg\"]";

    assert!(parse_products(raw).is_empty());
}

#[test]
fn test_parse_preserves_colon_in_value() {
    // 只在第一个冒号处切分，值里的冒号保留
    let raw = "id: 1\nname: A\nprice: 10\nimg: [\"a.jpg\"]\ndescription: a shirt: size M";

    let products = parse_products(raw);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].description.as_deref(), Some("a shirt: size M"));
}

#[test]
fn test_parse_skips_line_without_colon() {
    // 没有冒号的行被跳过，不影响区块的其他字段
    let raw = "id: 1\njust some noise\nname: A\nprice: 10\nimg: [\"a.jpg\"]";

    let products = parse_products(raw);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "A");
}

#[test]
fn test_parse_lowercases_keys() {
    let raw = "ID: 1\nName: A\nPRICE: 10\nImg: [\"a.jpg\"]";

    let products = parse_products(raw);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, "10");
}

#[test]
fn test_images_tolerates_single_quotes() {
    let mut product = sample_record();
    product.img = "['a.jpg', 'b.jpg']".to_string();

    assert_eq!(product.images(), vec!["a.jpg", "b.jpg"]);
}

#[test]
fn test_unparsable_img_defaults_to_empty() {
    let mut product = sample_record();
    product.img = "not-an-array".to_string();

    // 解析失败不报错，卡片里的图片引用为空
    assert!(product.images().is_empty());
    let card = render_card(&product);
    assert!(card.contains(r#"<img src="" "#));
}

#[test]
fn test_short_description_truncates_at_first_period() {
    let product = sample_record();
    assert_eq!(product.short_description(), "Nice dress");

    let mut without = sample_record();
    without.description = None;
    assert_eq!(without.short_description(), "");
}

#[test]
fn test_render_card_contents() {
    let card = render_card(&sample_record());

    // 第一张图片、名称、截断的描述、带货币符号的价格
    assert!(card.contains(r#"src="a.jpg""#));
    assert!(!card.contains("b.jpg"));
    assert!(card.contains("Red Dress"));
    assert!(card.contains("Nice dress"));
    assert!(!card.contains("Soft fabric"));
    assert!(card.contains("₹999"));
    assert!(card.contains("/product/1"));
}

#[test]
fn test_render_card_escapes_untrusted_text() {
    let mut product = sample_record();
    product.name = "<script>alert(1)</script>".to_string();

    let card = render_card(&product);

    assert!(!card.contains("<script>"));
    assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn test_escape_html_covers_metacharacters() {
    assert_eq!(escape_html(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
}

#[test]
fn test_fill_placeholder_only_first_occurrence() {
    let filled = fill_placeholder("{{title}} / {{title}}", "{{title}}", "X");
    assert_eq!(filled, "X / {{title}}");
}

#[test]
fn test_render_gallery_one_tag_per_image() {
    let gallery = render_gallery(&sample_record());

    assert_eq!(gallery.matches("<img").count(), 2);
    assert!(gallery.contains("a.jpg"));
    assert!(gallery.contains("b.jpg"));
}

#[test]
fn test_render_detail_page_fills_all_tokens() {
    let template = "<title>{{title}}</title>{{images}}{{details}}{{price}}{{description}}";

    let page = render_detail_page(template, &sample_record());

    assert!(page.contains("<title>Red Dress</title>"));
    assert!(page.contains("a.jpg"));
    assert!(page.contains("b.jpg"));
    assert!(page.contains("Price: ₹999"));
    assert!(page.contains("Nice dress. Soft fabric."));
    assert!(!page.contains("{{"));
}

// ---------- 目录服务测试（使用临时目录里的固定数据） ----------

/// 准备一套数据文件和模板，返回 (data_dir, public_dir)
fn setup_fixture(tag: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!("boutique-store-test-{tag}"));
    let _ = fs::remove_dir_all(&root);
    let data_dir = root.join("data");
    let public_dir = root.join("public");
    fs::create_dir_all(&data_dir).unwrap();
    fs::create_dir_all(&public_dir).unwrap();

    fs::write(
        data_dir.join("clothes.txt"),
        "id: 1\nname: Red Dress\nprice: 999\nimg: [\"a.jpg\",\"b.jpg\"]\ndescription: Nice dress. Soft fabric.\n---\nid: 7\nname: Shared From Clothes\nprice: 100\nimg: [\"c.jpg\"]",
    )
    .unwrap();
    fs::write(
        data_dir.join("jewellery.txt"),
        "id: 9\nname: Gold Ring\nprice: 4999\nimg: [\"ring.jpg\"]\ndescription: Classic ring.\n---\nid: 7\nname: Shared From Jewellery\nprice: 200\nimg: [\"d.jpg\"]",
    )
    .unwrap();

    fs::write(public_dir.join("clothes.html"), "<main>{{card}}</main>").unwrap();
    fs::write(public_dir.join("jewellery.html"), "<main>{{card}}</main>").unwrap();
    fs::write(
        public_dir.join("product.html"),
        "<title>{{title}}</title><div>{{images}}</div><div>{{details}}</div>",
    )
    .unwrap();

    (data_dir, public_dir)
}

#[tokio::test]
async fn test_category_page_renders_all_cards() {
    let (data_dir, public_dir) = setup_fixture("listing");
    let service = CatalogService::new(data_dir, public_dir);

    let page = service.category_page("clothes").await.unwrap();

    assert!(page.contains("Red Dress"));
    assert!(page.contains("Shared From Clothes"));
    assert!(!page.contains("{{card}}"));
}

#[tokio::test]
async fn test_lookup_finds_record_in_second_source() {
    let (data_dir, public_dir) = setup_fixture("second-source");
    let service = CatalogService::new(data_dir, public_dir);

    // id 9 只在第二个数据源（jewellery）里
    let page = service.product_page("9").await.unwrap();

    assert!(page.contains("Gold Ring"));
    assert!(page.contains("ring.jpg"));
}

#[tokio::test]
async fn test_lookup_prefers_first_source_in_order() {
    let (data_dir, public_dir) = setup_fixture("precedence");
    let service = CatalogService::new(data_dir, public_dir);

    // id 7 两个数据源都有，顺序扫描应取 clothes 里的那条
    let product = service.find_product("7").await.unwrap();

    assert_eq!(product.name, "Shared From Clothes");
}

#[tokio::test]
async fn test_lookup_unknown_id_is_not_found() {
    let (data_dir, public_dir) = setup_fixture("missing-id");
    let service = CatalogService::new(data_dir, public_dir);

    let err = service.product_page("does-not-exist").await.unwrap_err();

    assert!(matches!(err, CoreError::ProductNotFound));
}

#[tokio::test]
async fn test_missing_data_file_fails_listing() {
    let (data_dir, public_dir) = setup_fixture("no-data");
    fs::remove_file(data_dir.join("clothes.txt")).unwrap();
    let service = CatalogService::new(data_dir, public_dir);

    let err = service.category_page("clothes").await.unwrap_err();

    assert!(matches!(err, CoreError::DataUnavailable(category) if category == "clothes"));
}

#[tokio::test]
async fn test_missing_template_fails_detail() {
    let (data_dir, public_dir) = setup_fixture("no-template");
    fs::remove_file(public_dir.join("product.html")).unwrap();
    let service = CatalogService::new(data_dir, public_dir);

    let err = service.product_page("1").await.unwrap_err();

    assert!(matches!(err, CoreError::TemplateUnavailable));
}

// ---------- 表单消息格式测试 ----------

#[test]
fn test_contact_message_format() {
    let form = ContactRequest {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        message: "Do you ship abroad?".to_string(),
    };

    assert_eq!(
        format_contact_message(&form),
        "📩 *New Contact Message*\n\n👤 *Name*: Asha\n📧 *Email*: asha@example.com\n📝 *Message*: Do you ship abroad?"
    );
}

#[test]
fn test_order_message_format() {
    let form = OrderRequest {
        name: "Asha".to_string(),
        contact: "9876543210".to_string(),
        address: "12 MG Road".to_string(),
        product: "Red Dress".to_string(),
        price: "999".to_string(),
    };

    assert_eq!(
        format_order_message(&form),
        "🛍️ *New Order*\n\n👤 *Name*: Asha\n📞 *Contact*: 9876543210\n🏠 *Address*: 12 MG Road\n\n📦 *Product*: Red Dress\n💰 *Price*: ₹999"
    );
}
