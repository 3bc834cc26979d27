//! HTML 渲染：产品卡片、详情区块、模板占位符填充
//!
//! 所有来自记录的文本都视为不可信，插值前统一做 HTML 转义。

use super::model::ProductRecord;

/// 转义 HTML 元字符
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 替换模板中占位符的第一次出现，后续出现保持原样
pub fn fill_placeholder(template: &str, token: &str, value: &str) -> String {
    template.replacen(token, value, 1)
}

/// 渲染一张产品卡片
///
/// 图片取数组的第一个 URL，图片字段无法解析时为空字符串。
pub fn render_card(product: &ProductRecord) -> String {
    let img = product.images().into_iter().next().unwrap_or_default();

    format!(
        r#"<div class="bg-white p-4 rounded-lg shadow hover:shadow-xl transition">
  <img src="{img}" alt="{name}" class="w-full h-56 object-cover rounded mb-3" />
  <h3 class="text-xl font-semibold text-pink-700 mb-1">{name}</h3>
  <p class="text-gray-600 text-sm mb-2">{summary}</p>
  <p class="text-lg font-bold text-gray-800">₹{price}</p>
  <a href="/product/{id}" class="inline-block mt-3 bg-pink-600 text-white px-4 py-2 rounded hover:bg-pink-700 text-sm">View Details</a>
</div>"#,
        img = escape_html(&img),
        name = escape_html(&product.name),
        summary = escape_html(product.short_description()),
        price = escape_html(&product.price),
        id = escape_html(&product.id),
    )
}

/// 渲染详情页的图片画廊片段，每个 URL 一个 img 标签
pub fn render_gallery(product: &ProductRecord) -> String {
    product
        .images()
        .iter()
        .map(|src| {
            format!(
                r#"<img src="{}" class="w-full mb-3 rounded-lg shadow" />"#,
                escape_html(src)
            )
        })
        .collect()
}

/// 渲染详情区块：标题、完整描述、价格和供下单脚本使用的隐藏字段
pub fn render_details(product: &ProductRecord) -> String {
    let name = escape_html(&product.name);
    let description = escape_html(product.description.as_deref().unwrap_or(""));
    let price = escape_html(&product.price);
    let id = escape_html(&product.id);

    format!(
        r#"<h1 class="text-3xl font-bold text-pink-700">{name}</h1>
<p class="text-gray-600">{description}</p>
<p class="text-lg font-bold mt-2">Price: ₹{price}</p>
<input type="hidden" id="product-id" value="{id}" />
<input type="hidden" id="product-title" value="{name}" />
<input type="hidden" id="product-price" value="{price}" />"#
    )
}

/// 把产品填入详情页模板
pub fn render_detail_page(template: &str, product: &ProductRecord) -> String {
    let page = fill_placeholder(template, "{{images}}", &render_gallery(product));
    let page = fill_placeholder(&page, "{{details}}", &render_details(product));
    let page = fill_placeholder(&page, "{{title}}", &escape_html(&product.name));
    let page = fill_placeholder(&page, "{{price}}", &escape_html(&product.price));
    fill_placeholder(
        &page,
        "{{description}}",
        &escape_html(product.description.as_deref().unwrap_or("")),
    )
}
