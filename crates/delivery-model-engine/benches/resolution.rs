use std::borrow::Cow;

use criterion::{Criterion, criterion_group, criterion_main};
use delivery_model_engine::{
    ContentItemPayload, ContentModel, ElementValue, LinkedItemsIndex, ModelProvider, TypeRegistry,
    inline::parse_rich_text,
};

#[derive(Debug, Default)]
struct Block {
    rt: String,
}

impl ContentModel for Block {
    fn properties(&self) -> Vec<Cow<'static, str>> {
        vec!["rt".into()]
    }

    fn bind(&mut self, _property: &str, value: ElementValue) {
        if let ElementValue::RichText(rt) = value {
            self.rt = rt;
        }
    }
}

fn object(codename: &str) -> String {
    format!(
        r#"<object type="application/kenticocloud" data-type="item" data-codename="{codename}"></object>"#
    )
}

fn block(codename: &str, value: String) -> ContentItemPayload {
    ContentItemPayload::from_json(
        &serde_json::json!({
            "system": { "id": codename, "name": codename, "codename": codename, "type": "block" },
            "elements": { "rt": { "type": "rich_text", "name": "RT", "value": value } }
        })
        .to_string(),
    )
    .unwrap()
}

/// Layers of two items where both items of a layer reference both items of
/// the next one. Nothing is memoized, so work doubles per layer.
fn diamond_layers(layers: usize) -> (ContentItemPayload, LinkedItemsIndex) {
    let mut items = vec![];
    for layer in 0..layers {
        for side in ["l", "r"] {
            let value = if layer + 1 == layers {
                format!("<p>{side}{layer}</p>")
            } else {
                format!(
                    "<p>{side}{layer}</p>{}{}",
                    object(&format!("l{}", layer + 1)),
                    object(&format!("r{}", layer + 1))
                )
            };
            items.push(block(&format!("{side}{layer}"), value));
        }
    }
    let root = block("root", format!("{}{}", object("l0"), object("r0")));
    (root, items.into_iter().collect())
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.sample_size(10);

    let provider = ModelProvider::builder(TypeRegistry::new().with_type::<Block>("block"))
        .inline_resolver::<Block>(|data| data.item.rt.clone())
        .build();

    for layers in [4, 8] {
        let (root, index) = diamond_layers(layers);
        group.bench_function(format!("diamond_{layers}_layers"), |b| {
            b.iter(|| {
                let model = provider.get_model(std::hint::black_box(&root), &index);
                std::hint::black_box(model);
            });
        });
    }

    let long_value = format!("<p>text</p>{}", object("x")).repeat(500);
    group.bench_function("parse_rich_text", |b| {
        b.iter(|| {
            let segments = parse_rich_text(std::hint::black_box(&long_value));
            std::hint::black_box(segments);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
