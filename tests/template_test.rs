use xtool_demo::{
    name::ProjectName,
    renderer::MiniJinjaRenderer,
    template::{render_templates, template_context, TEMPLATES},
};

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let name = ProjectName::parse("Hello-App").unwrap();
    let module = name.module_name();

    let first = render_templates(&engine, &name, &module).unwrap();
    let second = render_templates(&engine, &name, &module).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), TEMPLATES.len());
}

#[test]
fn test_template_context() {
    let name = ProjectName::parse("Hello-App").unwrap();
    let context = template_context(&name, &name.module_name());
    assert_eq!(context, serde_json::json!({"name": "Hello-App", "module": "Hello_App"}));
}

#[test]
fn test_sourcekit_config_is_json() {
    let engine = MiniJinjaRenderer::new();
    let name = ProjectName::parse("demo").unwrap();
    let files = render_templates(&engine, &name, &name.module_name()).unwrap();

    let config = files
        .iter()
        .find(|file| file.path == ".sourcekit-lsp/config.json")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&config.content).unwrap();
    assert_eq!(value["swiftPM"]["swiftSDK"], "arm64-apple-ios");
}
