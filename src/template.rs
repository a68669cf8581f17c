//! The fixed set of files written into every new project.
//!
//! Each entry pairs a path template with a content template; both are
//! rendered against a context holding `name` (the package name) and
//! `module` (the module name). Rendering has no other inputs, so the
//! same pair always produces the same bytes.

use crate::error::Result;
use crate::name::{ModuleName, ProjectName};
use crate::renderer::TemplateRenderer;

/// One generated file, before rendering.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project directory
    pub path: &'static str,
    pub content: &'static str,
}

/// One generated file, after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

const PACKAGE_SWIFT: &str = r#"// swift-tools-version: 6.0

import PackageDescription

let package = Package(
    name: "{{ name }}",
    platforms: [
        .iOS(.v17),
        .macOS(.v14),
    ],
    products: [
        // An xtool project should contain exactly one library product,
        // representing the main app.
        .library(
            name: "{{ module }}",
            targets: ["{{ module }}"]
        ),
    ],
    targets: [
        .target(
            name: "{{ module }}"
        ),
    ]
)
"#;

const XTOOL_YML: &str = "version: 1
bundleID: com.example.{{ name }}
";

const GITIGNORE: &str = ".DS_Store
/.build
/Packages
xcuserdata/
DerivedData/
.swiftpm/configuration/registries.json
.swiftpm/xcode/package.xcworkspace/contents.xcworkspacedata
.netrc

/xtool
";

const SOURCEKIT_CONFIG: &str = r#"{
    "swiftPM": {
        "swiftSDK": "arm64-apple-ios"
    }
}
"#;

const APP_SWIFT: &str = "import SwiftUI

@main
struct {{ module }}App: App {
    var body: some Scene {
        WindowGroup {
            ContentView()
        }
    }
}
";

const CONTENT_VIEW: &str = r#"import SwiftUI

struct ContentView: View {
    var body: some View {
        VStack {
            Image(systemName: "globe")
                .imageScale(.large)
                .foregroundStyle(.tint)
            Text("Hello, world!")
        }
        .padding()
    }
}
"#;

/// Files generated for a new project, in the order they are written.
pub const TEMPLATES: [TemplateFile; 6] = [
    TemplateFile { path: "Package.swift", content: PACKAGE_SWIFT },
    TemplateFile { path: "xtool.yml", content: XTOOL_YML },
    TemplateFile { path: ".gitignore", content: GITIGNORE },
    TemplateFile { path: ".sourcekit-lsp/config.json", content: SOURCEKIT_CONFIG },
    TemplateFile { path: "Sources/{{ module }}/{{ module }}App.swift", content: APP_SWIFT },
    TemplateFile { path: "Sources/{{ module }}/ContentView.swift", content: CONTENT_VIEW },
];

/// Builds the rendering context for a project.
pub fn template_context(name: &ProjectName, module: &ModuleName) -> serde_json::Value {
    serde_json::json!({
        "name": name.as_str(),
        "module": module.as_str(),
    })
}

/// Renders every entry of [`TEMPLATES`] for the given project.
///
/// # Errors
/// * `Error::TemplateError` if a template fails to render
pub fn render_templates(
    engine: &dyn TemplateRenderer,
    name: &ProjectName,
    module: &ModuleName,
) -> Result<Vec<RenderedFile>> {
    let context = template_context(name, module);
    TEMPLATES
        .iter()
        .map(|template| -> Result<RenderedFile> {
            Ok(RenderedFile {
                path: engine.render(template.path, &context)?,
                content: engine.render(template.content, &context)?,
            })
        })
        .collect()
}
