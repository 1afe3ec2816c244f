use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relayout_parser::parse;
use relayout_rules::{builtin_web, Replacements, StyleSheet};
use relayout_translator::{Translator, WebStrategy};

fn convert_screen(c: &mut Criterion) {
    let source = r#"
        <LinearLayout android:orientation="vertical"
            android:layout_width="match_parent"
            android:layout_height="match_parent">
            <TextView android:id="@+id/title"
                android:layout_width="wrap_content"
                android:layout_height="wrap_content"/>
            <FrameLayout android:layout_width="match_parent"
                android:layout_height="0dp">
                <ImageView android:id="@+id/hero"
                    android:layout_width="match_parent"
                    android:layout_height="match_parent"/>
                <Button android:id="@+id/action"
                    android:layout_gravity="bottom|end"/>
            </FrameLayout>
        </LinearLayout>
    "#;
    let root = parse(source).unwrap();
    let replacements = Replacements::from_rule_set(builtin_web()).unwrap();
    let styles = StyleSheet::default();

    c.bench_function("convert_screen", |b| {
        b.iter(|| {
            let translator = Translator::new(&replacements, &styles, &WebStrategy);
            translator.convert_element(black_box(&root)).unwrap()
        })
    });
}

criterion_group!(benches, convert_screen);
criterion_main!(benches);
