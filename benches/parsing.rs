use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;
use webloc_report::scanner::walker::relative_dir;
use webloc_report::shortcut::extract_url;

const SAFARI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>URL</key>
	<string>https://www.rust-lang.org/</string>
</dict>
</plist>
"#;

fn bench_extract_url(c: &mut Criterion) {
    let many_keys = format!(
        "<plist><dict>{}<key>URL</key><string>https://late.test</string></dict></plist>",
        "<key>Other</key><string>x</string>".repeat(200)
    );

    let inputs = vec![
        ("safari", SAFARI.to_string()),
        ("url_last", many_keys),
        ("malformed", "<plist><dict><key>URL".to_string()),
        ("not_xml", "just some notes ".repeat(64)),
    ];

    let mut group = c.benchmark_group("extract_url");
    for (name, input) in &inputs {
        group.bench_with_input(BenchmarkId::new("extract", name), input, |b, s| {
            b.iter(|| extract_url(black_box(s.as_bytes())))
        });
    }
    group.finish();
}

fn bench_relative_dir(c: &mut Criterion) {
    let root = Path::new("/Users/me/Bookmarks");
    let nested = Path::new("/Users/me/Bookmarks/a/b/c/d/link.webloc");

    c.bench_function("relative_dir", |b| {
        b.iter(|| relative_dir(black_box(root), black_box(nested)))
    });
}

criterion_group!(benches, bench_extract_url, bench_relative_dir);
criterion_main!(benches);
