use serde_json::{json, Value};

use videocrop_core::crop::domain::draw_command::DrawCommand;
use videocrop_core::shared::pixel_box::PixelBox;

/// One line per command: label, destination, then kind-specific details.
pub fn to_text(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        let line = match command {
            DrawCommand::BorderFill { dest, color, .. } => format!(
                "{:<17} dest={} color=#{:02x}{:02x}{:02x}{:02x}",
                command.label(),
                fmt_box(dest),
                color.red,
                color.green,
                color.blue,
                color.alpha
            ),
            DrawCommand::MainFrame {
                dest,
                tex_coords,
                state,
            } => {
                let [x1, y1, x2, y2] = tex_coords.to_array();
                format!(
                    "{:<17} dest={} tex={} opacity={} cull={}",
                    command.label(),
                    fmt_box(dest),
                    fmt_box(&PixelBox::new(x1, y1, x2, y2)),
                    state.opacity,
                    state.cull_backface
                )
            }
            DrawCommand::Overlay {
                index,
                dest,
                tex_coords,
                state,
            } => format!(
                "{:<17} #{index} dest={} tex={} opacity={}",
                command.label(),
                fmt_box(dest),
                fmt_box(tex_coords),
                state.opacity
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn to_json(commands: &[DrawCommand]) -> Result<String, serde_json::Error> {
    let values: Vec<Value> = commands.iter().map(command_json).collect();
    serde_json::to_string_pretty(&values)
}

fn command_json(command: &DrawCommand) -> Value {
    match command {
        DrawCommand::BorderFill { dest, color, idle } => json!({
            "kind": "border_fill",
            "label": command.label(),
            "dest": box_array(dest),
            "color": [color.red, color.green, color.blue, color.alpha],
            "idle": idle,
        }),
        DrawCommand::MainFrame {
            dest,
            tex_coords,
            state,
        } => json!({
            "kind": "main_frame",
            "label": command.label(),
            "dest": box_array(dest),
            "tex_coords": tex_coords.to_array(),
            "opacity": state.opacity,
            "cull_backface": state.cull_backface,
        }),
        DrawCommand::Overlay {
            index,
            dest,
            tex_coords,
            state,
        } => json!({
            "kind": "overlay",
            "label": command.label(),
            "index": index,
            "dest": box_array(dest),
            "tex_coords": box_array(tex_coords),
            "opacity": state.opacity,
        }),
    }
}

fn box_array(b: &PixelBox) -> [f32; 4] {
    [b.x1, b.y1, b.x2, b.y2]
}

fn fmt_box(b: &PixelBox) -> String {
    format!("[{:.3}, {:.3}, {:.3}, {:.3}]", b.x1, b.y1, b.x2, b.y2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use videocrop_core::crop::domain::draw_command::RenderState;
    use videocrop_core::shared::color::Color;
    use videocrop_core::shared::normalized_box::NormalizedBox;

    fn sample_commands() -> Vec<DrawCommand> {
        let state = RenderState {
            opacity: 255,
            cull_backface: false,
        };
        vec![
            DrawCommand::BorderFill {
                dest: PixelBox::new(0.0, 0.0, 80.0, 240.0),
                color: Color::rgba(0, 0, 0, 255),
                idle: false,
            },
            DrawCommand::MainFrame {
                dest: PixelBox::new(80.0, 0.0, 240.0, 240.0),
                tex_coords: NormalizedBox::UNIT,
                state,
            },
            DrawCommand::Overlay {
                index: 3,
                dest: PixelBox::new(80.0, 0.0, 100.0, 20.0),
                tex_coords: PixelBox::new(0.0, 0.0, 1.0, 1.0),
                state,
            },
        ]
    }

    #[test]
    fn test_text_has_one_line_per_command() {
        let text = to_text(&sample_commands());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("CropVideoBorders"));
        assert!(lines[0].contains("color=#000000ff"));
        assert!(lines[1].contains("dest=[80.000, 0.000, 240.000, 240.000]"));
        assert!(lines[2].contains("#3"));
    }

    #[test]
    fn test_json_round_trips_through_serde() {
        let json = to_json(&sample_commands()).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["kind"], "border_fill");
        assert_eq!(parsed[1]["tex_coords"], json!([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(parsed[2]["index"], 3);
        assert_eq!(parsed[2]["label"], "CropVideoOverlay");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_text(&[]), "");
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
