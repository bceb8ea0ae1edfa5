use catalog_core::{
    AppViewModel, DetailPhase, DetailViewModel, Product, ProductDetails, SearchPhase,
    SearchViewModel,
};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = render_search(&view.search);
    lines.extend(render_detail(&view.detail));
    lines
}

fn render_search(view: &SearchViewModel) -> Vec<String> {
    let phase = match view.phase {
        SearchPhase::Idle => "Idle",
        SearchPhase::Searching => "Searching",
        SearchPhase::Loaded => "Loaded",
        SearchPhase::LoadError => "Load error",
    };
    let mut lines = vec![match &view.last_searched_query {
        Some(query) => format!(
            "Search: {} | Query: \"{}\" | Results: {} | Pages: {}",
            phase,
            query,
            view.products.len(),
            view.pages_loaded
        ),
        None => format!("Search: {} | Query: \"{}\"", phase, view.query),
    }];

    for (index, product) in view.products.iter().enumerate() {
        lines.push(product_line(index + 1, product));
    }
    if view.loading {
        lines.push(format!("  loading page {}...", view.next_page));
    } else if view.phase == SearchPhase::Loaded && view.has_more {
        lines.push("  (more available: type `more`)".to_string());
    } else if view.phase == SearchPhase::Loaded && view.products.is_empty() {
        lines.push("  no products found".to_string());
    }
    if let Some(error) = &view.error {
        lines.push(format!("  error: {error}"));
    }
    lines
}

fn product_line(position: usize, product: &Product) -> String {
    let mut line = format!(
        "{:>3}. [{}] {} {}",
        position,
        product.id,
        product.title,
        format_price(product.price, &product.currency)
    );
    if product.is_discounted() {
        if let Some(regular) = product.regular_price {
            line.push_str(&format!(" (was {regular:.2})"));
        }
    }
    if let Some(rating) = product.rating {
        line.push_str(&format!(" {rating:.1}*"));
    }
    line
}

fn render_detail(view: &DetailViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    match view.phase {
        DetailPhase::Idle => {}
        DetailPhase::Loading => lines.push(format!(
            "Detail: loading {}...",
            view.product_id.as_deref().unwrap_or_default()
        )),
        DetailPhase::Loaded | DetailPhase::Error => {
            if let Some(product) = &view.product {
                lines.extend(detail_lines(product));
            }
        }
    }
    if let Some(error) = &view.error {
        lines.push(format!("Detail error: {error} (type `clear` to dismiss)"));
    }
    lines
}

fn detail_lines(product: &ProductDetails) -> Vec<String> {
    let mut lines = vec![format!("Detail: [{}] {}", product.id, product.name)];
    if let Some(brand) = &product.brand_name {
        lines.push(format!("  Brand: {brand}"));
    }
    if let Some(price) = product.display_price() {
        let mut text = format!("  Price: {}", format_price(price, catalog_core::CURRENCY));
        if product.is_product_on_sale {
            if let Some(end) = &product.sale_end_date {
                text.push_str(&format!(" (sale ends {end})"));
            }
        }
        lines.push(text);
    }
    if let Some(description) = product
        .short_description
        .as_ref()
        .or(product.long_description.as_ref())
    {
        lines.push(format!("  {description}"));
    }
    if let Some(availability) = &product.availability {
        let online = if availability.is_available_online {
            "available online"
        } else {
            "not available online"
        };
        lines.push(format!("  Availability: {online}"));
    }
    for (group, specs) in product.specs_by_group() {
        lines.push(format!("  {group}:"));
        for spec in specs {
            lines.push(format!(
                "    {}: {}",
                spec.name.as_deref().unwrap_or_default(),
                spec.value.as_deref().unwrap_or_default()
            ));
        }
    }
    if !product.whats_in_the_box.is_empty() {
        lines.push(format!("  In the box: {}", product.whats_in_the_box.join(", ")));
    }
    lines
}

fn format_price(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}
