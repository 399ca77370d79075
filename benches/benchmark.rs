//! Performance benchmarks for content-outline.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic HTML (~1KB) for microbenchmarks
//! - Generated long-form pages for each location strategy

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use content_outline::{extract, extract_with_options, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <meta name="author" content="John Doe">
    <meta name="description" content="A sample article for benchmarking.">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p class="byline">By John Doe</p>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that the locator should recognize as the main region.</p>
        <h2>Second Section</h2>
        <p>Here is a second paragraph with more content. The outline should
        list the article headings while ignoring navigation and other boilerplate.</p>
        <h3>A Subsection</h3>
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the extraction performance.</p>
    </article>
    <aside>
        <h3>Related Articles</h3>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

/// Long article page: `sections` headed sections inside an `<article>`.
fn article_page(sections: usize) -> String {
    let body: String = (0..sections)
        .map(|i| {
            format!(
                "<h{level}>Section {i}</h{level}><p>{}</p><ul><li><a href='/{i}'>Related {i}</a></li></ul>",
                "Benchmark prose for a long article section. ".repeat(8),
                level = i % 3 + 2
            )
        })
        .collect();
    format!("<html><body><nav><a href='/'>Home</a></nav><article><h1>Long read</h1>{body}</article></body></html>")
}

/// Same content without semantic containers, forcing the fallback strategies.
fn div_soup_page(sections: usize) -> String {
    article_page(sections)
        .replace("<article>", "<div class='wrapper'><div class='entry'>")
        .replace("</article>", "</div></div>")
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        min_article_text_len: 100,
        skip_empty_headings: false,
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Benchmark generated pages of growing size for each strategy
fn bench_generated_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated");

    for sections in [10, 100, 500] {
        for (name, html) in [("article", article_page(sections)), ("div_soup", div_soup_page(sections))] {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("{sections} sections ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| extract(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_generated_pages
);
criterion_main!(benches);
