use std::fs;
use std::path::Path;

use frontend_entrypoints::{EntrypointBuilder, ProjectConfig, normalize_manifest_file};
use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, contents).unwrap();
}

#[test]
fn discovers_entrypoints_and_cleans_manifest() {
  let dir = tempdir().unwrap();
  let root = dir.path();

  write_file(
    &root.join("entrypoints.config.json"),
    r#"{"sites":["mysite"],"rootBuild":{"ignoreUnderscore":true}}"#,
  );
  write_file(&root.join("Build/Frontend/Styles/main.scss"), "");
  write_file(&root.join("Build/Frontend/Styles/_variables.scss"), "");
  write_file(&root.join("Build/Frontend/Styles/mysite/x.scss"), "");
  write_file(&root.join("Build/Frontend/Styles/other/y.scss"), "");
  write_file(&root.join("Build/Frontend/JavaScript/app.js"), "");
  write_file(
    &root.join("packages/theme/Configuration/ViteEntrypoints.json"),
    r#"["../Resources/Private/Styles/*.scss", "../Resources/Private/JavaScript/MySite/*.ts"]"#,
  );
  write_file(&root.join("packages/theme/Resources/Private/Styles/main.scss"), "");
  write_file(&root.join("packages/theme/Resources/Private/JavaScript/MySite/menu.ts"), "");

  let layout = ProjectConfig::discover(root).unwrap().into_layout(root);
  let builder = EntrypointBuilder::new(&layout);
  let artifacts = builder.build().unwrap();

  let names: Vec<&str> = artifacts.entrypoints.names().collect();
  assert_eq!(names, vec![
    "global_main",
    "global_app",
    "mysite_x",
    "global_y",
    "global_main_4",
    "mysite_menu",
  ]);
  assert_eq!(
    artifacts.entrypoints.get("global_main_4"),
    Some(root.join("packages/theme/Resources/Private/Styles/main.scss").as_path())
  );

  let input = artifacts.entrypoints.to_bundler_input();
  assert!(input["mysite_x"].ends_with("Build/Frontend/Styles/mysite/x.scss"));

  write_file(
    &layout.manifest_path,
    r#"{
  "Build/Frontend/Styles/main.scss": {
    "file": "assets/main-1.css",
    "src": "Build/Frontend/Styles/main.scss",
    "isEntry": true,
    "imports": ["./main.scss", "./other.scss"]
  },
  "Build/Frontend/Styles/mysite/x.scss": {
    "file": "assets/x-2.css",
    "name": "x",
    "src": "Build/Frontend/Styles/mysite/x.scss",
    "isEntry": true
  },
  "Build/Frontend/Images/logo.png": {
    "file": "assets/logo-3.png",
    "name": "logo",
    "src": "Build/Frontend/Images/logo.png"
  },
  "_shared-4.js": {
    "file": "assets/shared-4.js",
    "name": "shared"
  }
}"#,
  );

  let report = normalize_manifest_file(&layout.manifest_path, &builder.manifest_normalizer(&artifacts))
    .unwrap()
    .expect("manifest was written");
  assert_eq!(report.entries, 4);
  assert_eq!(report.removed_imports, 1);

  let manifest: serde_json::Value =
    serde_json::from_str(&fs::read_to_string(&layout.manifest_path).unwrap()).unwrap();
  let main = &manifest["Build/Frontend/Styles/main.scss"];
  assert_eq!(main["imports"], serde_json::json!(["other.scss"]));
  assert_eq!(main["name"], "global_main");
  assert_eq!(manifest["Build/Frontend/Styles/mysite/x.scss"]["name"], "mysite_x");
  assert!(manifest["Build/Frontend/Images/logo.png"].get("name").is_none());
  assert_eq!(manifest["_shared-4.js"]["name"], "shared");
}

#[test]
fn missing_inputs_degrade_to_empty_results() {
  let dir = tempdir().unwrap();
  let root = dir.path();

  let layout = ProjectConfig::default().into_layout(root);
  let builder = EntrypointBuilder::new(&layout);
  let artifacts = builder.build().unwrap();
  assert!(artifacts.entrypoints.is_empty());

  let result =
    normalize_manifest_file(&layout.manifest_path, &builder.manifest_normalizer(&artifacts)).unwrap();
  assert!(result.is_none());
  assert!(!layout.manifest_path.exists());
}

#[test]
fn malformed_declaration_aborts_before_bundling() {
  let dir = tempdir().unwrap();
  let root = dir.path();
  write_file(
    &root.join("packages/broken/Configuration/ViteEntrypoints.json"),
    "[\"Styles/*.scss\",",
  );

  let layout = ProjectConfig::default().into_layout(root);
  let err = EntrypointBuilder::new(&layout).build().unwrap_err();
  assert!(err.to_string().contains("ViteEntrypoints.json"));
}

#[test]
fn overlapping_declarations_register_each_file_once() {
  let dir = tempdir().unwrap();
  let root = dir.path();
  write_file(&root.join("Build/Frontend/Styles/main.scss"), "");
  write_file(
    &root.join("packages/theme/Configuration/ViteEntrypoints.json"),
    r#"["../Resources/Styles/*.scss", "../Resources/Styles/main.scss"]"#,
  );
  write_file(&root.join("packages/theme/Resources/Styles/main.scss"), "");

  let layout = ProjectConfig::default().into_layout(root);
  let artifacts = EntrypointBuilder::new(&layout).build().unwrap();

  let theme_main = root.join("packages/theme/Resources/Styles/main.scss");
  let registered = artifacts
    .entrypoints
    .iter()
    .filter(|(_, path)| *path == theme_main.as_path())
    .count();
  assert_eq!(registered, 1);
  assert_eq!(artifacts.entrypoints.names().collect::<Vec<_>>(), vec![
    "global_main",
    "global_main_1",
  ]);
}

#[test]
fn unsupported_root_pattern_fails_without_root_folder() {
  let dir = tempdir().unwrap();
  let root = dir.path();
  write_file(
    &root.join("entrypoints.config.json"),
    r#"{"rootBuild":{"patterns":["Styles/**/*.scss"]}}"#,
  );

  let layout = ProjectConfig::discover(root).unwrap().into_layout(root);
  let err = EntrypointBuilder::new(&layout).build().unwrap_err();
  assert!(err.to_string().contains("Styles/**/*.scss"));
}
