use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::introspect::PropertySource;
use crate::method_block::generate_method_block;
use crate::naming::{controller_class_name, sanitize_identifier};
use crate::property_table::lookup;
use crate::template::Template;
use crate::types::{GenerationReport, InspectOutput, PropertyReport, ShaderProperty};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RenderedController {
    pub shader: String,
    pub class_name: String,
    pub output_path: PathBuf,
    pub properties: usize,
    pub lines: Vec<String>,
}

impl RenderedController {
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn report(&self, written: bool) -> GenerationReport {
        GenerationReport {
            shader: self.shader.clone(),
            class_name: self.class_name.clone(),
            output_path: self.output_path.display().to_string(),
            properties: self.properties,
            lines: self.lines.len(),
            written,
        }
    }
}

pub fn resolve_target(target: Option<&str>, source: &dyn PropertySource) -> Result<String> {
    if let Some(t) = target {
        return Ok(t.to_string());
    }
    let mut names = source.shader_names();
    match names.len() {
        // nothing to pick from is an absent property list, not an ambiguity
        0 => Err(GenError::EmptyProperties {
            shader: String::new(),
        }
        .into()),
        1 => Ok(names.remove(0)),
        _ => Err(GenError::AmbiguousTarget { candidates: names }.into()),
    }
}

fn fetch_properties(shader: &str, source: &dyn PropertySource) -> Result<Vec<ShaderProperty>> {
    let properties = source.shader_properties(shader)?.unwrap_or_default();
    if properties.is_empty() {
        return Err(GenError::EmptyProperties {
            shader: shader.to_string(),
        }
        .into());
    }
    Ok(properties)
}

fn warn_on_degraded(properties: &[ShaderProperty]) {
    let mut seen = HashSet::new();
    for p in properties {
        if lookup(&p.kind).is_empty() {
            warn!(
                "property {} (#{}) has unsupported kind {:?}; generated members will not compile",
                p.name, p.index, p.kind
            );
        }
        let ident = sanitize_identifier(&p.description);
        if !seen.insert(ident.clone()) {
            warn!(
                "property {} (#{}) reuses identifier {}; generated members collide",
                p.name, p.index, ident
            );
        }
    }
}

pub fn render_controller(
    cfg: &GeneratorConfig,
    source: &dyn PropertySource,
) -> Result<RenderedController> {
    let shader = resolve_target(cfg.target.as_deref(), source)?;
    let properties = fetch_properties(&shader, source)?;
    info!("Shader: {} Properties: {}", shader, properties.len());
    warn_on_degraded(&properties);

    let template = match &cfg.template {
        Some(path) => Template::load(path)?,
        None => {
            debug!("no template configured, using built-in template");
            Template::builtin()
        }
    };

    let class_name = controller_class_name(&shader);
    let blocks: Vec<Vec<String>> = properties
        .iter()
        .map(|p| generate_method_block(p, cfg.make_rpcs, cfg.on_value_changed))
        .collect();
    let lines = template.splice(&blocks, &class_name)?;

    let output_path = cfg.output_dir.join(cfg.output_file_name(&class_name));
    Ok(RenderedController {
        shader,
        class_name,
        output_path,
        properties: properties.len(),
        lines,
    })
}

pub fn write_controller(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed writing {}", path.display()))?;
    Ok(())
}

pub fn generate_controller(
    cfg: &GeneratorConfig,
    source: &dyn PropertySource,
) -> Result<GenerationReport> {
    let rendered = render_controller(cfg, source)?;
    write_controller(&rendered.output_path, &rendered.text())?;
    info!(
        "Wrote {} to {}",
        cfg.output_file_name(&rendered.class_name),
        rendered.output_path.display()
    );
    Ok(rendered.report(true))
}

pub fn preview_controller(
    cfg: &GeneratorConfig,
    source: &dyn PropertySource,
) -> Result<(GenerationReport, String)> {
    let rendered = render_controller(cfg, source)?;
    Ok((rendered.report(false), rendered.text()))
}

pub fn inspect_shader(target: Option<&str>, source: &dyn PropertySource) -> Result<InspectOutput> {
    let shader = resolve_target(target, source)?;
    let properties = source.shader_properties(&shader)?.unwrap_or_default();
    let reports: Vec<PropertyReport> = properties
        .into_iter()
        .map(|p| {
            let mapping = lookup(&p.kind);
            PropertyReport {
                index: p.index,
                identifier: sanitize_identifier(&p.description),
                declared_type: mapping.declared_type.to_string(),
                setter: mapping.setter_name.to_string(),
                name: p.name,
                description: p.description,
                kind: p.kind,
            }
        })
        .collect();
    Ok(InspectOutput {
        class_name: controller_class_name(&shader),
        shader,
        property_count: reports.len(),
        unrecognized_count: reports.iter().filter(|r| !r.kind.is_recognized()).count(),
        properties: reports,
    })
}
