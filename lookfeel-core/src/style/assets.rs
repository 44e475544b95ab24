// SPDX-License-Identifier: LGPL-3.0-only

//! Standard pixmaps and icons.
//!
//! Lookup order is the desktop icon theme first, then the bundled set. The
//! bundled set names resources under [RESOURCE_PREFIX]; they turn into
//! pixels only when an [AssetSource](crate::asset::AssetSource) is plugged
//! in. Title bar and message glyphs are drawn as vector pictures, so they
//! render without any image data.

use std::sync::Arc;

use vello::kurbo;
use vello::peniko::Color;

use super::{CommonStyle, Style};
use crate::asset::{load_pixmap, AssetImage, IconSet, Pixmap};
use crate::canvas::{Brush, Canvas, Pen, Picture, PointF};
use crate::geometry::{Alignment, Rect, Size};
use crate::kinds::StandardPixmap;
use crate::option::DrawOption;

/// Prefix of every bundled resource name.
pub const RESOURCE_PREFIX: &str = ":/lookfeel/common/";

const STANDARD_SIZES: &[i32] = &[16, 32, 128];
const TITLE_BAR_SIZES: &[i32] = &[16, 32, 48];
const DOCK_TITLE_SIZES: &[i32] = &[10, 16, 20, 32, 48, 64];
const TOOL_BAR_EXT_H_SIZES: &[i32] = &[8, 16, 32];
const TOOL_BAR_EXT_V_SIZES: &[i32] = &[5, 10, 20];
const BROWSER_SIZES: &[i32] = &[24, 32];
const MEDIA_SIZES: &[i32] = &[16, 32];
const SINGLE_SIZE: &[i32] = &[16];

/// Extent asked from the theme for single-size pixmaps.
const THEME_PIXMAP_EXTENT: i32 = 16;

/// Design grid of the vector glyphs.
const GLYPH_GRID: f64 = 16.0;

const SYMBOLIC_LINK_EMBLEM: &str = "emblem-symbolic-link";

/// Ids that are aliases of another id once the direction is known.
fn resolve_direction(sp: StandardPixmap, rtl: bool) -> StandardPixmap {
    use StandardPixmap::*;
    match sp {
        ArrowForward | CommandLink => {
            if rtl {
                ArrowLeft
            } else {
                ArrowRight
            }
        },
        ArrowBack | FileDialogBack => {
            if rtl {
                ArrowRight
            } else {
                ArrowLeft
            }
        },
        FileDialogToParent => ArrowUp,
        other => other,
    }
}

/// Freedesktop names for `sp`, most specific first.
fn theme_names(sp: StandardPixmap) -> &'static [&'static str] {
    use StandardPixmap::*;
    match sp {
        DirHomeIcon => &["user-home"],
        MessageBoxInformation => &["dialog-information"],
        MessageBoxWarning => &["dialog-warning"],
        MessageBoxCritical => &["dialog-error"],
        MessageBoxQuestion => &["dialog-question"],
        DialogOpenButton | DirOpenIcon => &["folder-open"],
        DialogSaveButton => &["document-save"],
        DialogApplyButton => &["dialog-ok-apply"],
        DialogYesButton | DialogOkButton => &["dialog-ok"],
        DialogDiscardButton => &["edit-delete"],
        DialogResetButton => &["edit-clear"],
        DialogHelpButton => &["help-contents"],
        DialogNoButton | DialogCancelButton => &["dialog-cancel", "process-stop"],
        DialogCloseButton => &["window-close", "dialog-close"],
        FileIcon => &["text-x-generic", "empty"],
        DirClosedIcon | DirIcon => &["folder"],
        DriveFDIcon => &["media-floppy", "floppy_unmount"],
        ComputerIcon => &["computer", "system"],
        DesktopIcon => &["user-desktop", "desktop"],
        TrashIcon => &["user-trash", "trashcan_empty"],
        DriveCDIcon | DriveDVDIcon => &["media-optical", "cdrom_unmount"],
        DriveHDIcon => &["drive-harddisk", "hdd_unmount"],
        FileDialogNewFolder => &["folder-new", "folder_new"],
        ArrowUp => &["go-up", "up"],
        ArrowDown => &["go-down", "down"],
        ArrowRight => &["go-next", "forward"],
        ArrowLeft => &["go-previous", "back"],
        FileDialogDetailedView => &["view-list-details", "view_detailed"],
        FileDialogListView => &["view-list-icons", "view_icon"],
        BrowserReload => &["view-refresh", "reload"],
        BrowserStop => &["process-stop"],
        MediaPlay => &["media-playback-start"],
        MediaPause => &["media-playback-pause"],
        MediaStop => &["media-playback-stop"],
        MediaSeekForward => &["media-seek-forward"],
        MediaSeekBackward => &["media-seek-backward"],
        MediaSkipForward => &["media-skip-forward"],
        MediaSkipBackward => &["media-skip-backward"],
        MediaVolume => &["audio-volume-medium"],
        MediaVolumeMuted => &["audio-volume-muted"],
        _ => &[],
    }
}

/// The id whose theme icon a symbolic-link variant decorates.
fn link_base(sp: StandardPixmap) -> Option<StandardPixmap> {
    match sp {
        StandardPixmap::FileLinkIcon => Some(StandardPixmap::FileIcon),
        StandardPixmap::DirLinkIcon => Some(StandardPixmap::DirIcon),
        _ => None,
    }
}

/// Bundled resource stem and size list of a multi-size icon.
fn icon_family(sp: StandardPixmap, rtl: bool) -> Option<(&'static str, &'static [i32])> {
    use StandardPixmap::*;
    let family = match sp {
        TitleBarMinButton => ("titlebar-min", TITLE_BAR_SIZES),
        TitleBarMaxButton => ("titlebar-max", TITLE_BAR_SIZES),
        TitleBarShadeButton => ("titlebar-shade", TITLE_BAR_SIZES),
        TitleBarUnshadeButton => ("titlebar-unshade", TITLE_BAR_SIZES),
        TitleBarContextHelpButton => ("titlebar-contexthelp", TITLE_BAR_SIZES),
        TitleBarCloseButton => ("closedock", DOCK_TITLE_SIZES),
        TitleBarNormalButton => ("normalizedockup", DOCK_TITLE_SIZES),
        ToolBarHorizontalExtensionButton if rtl => ("toolbar-ext-h-rtl", TOOL_BAR_EXT_H_SIZES),
        ToolBarHorizontalExtensionButton => ("toolbar-ext-h", TOOL_BAR_EXT_H_SIZES),
        ToolBarVerticalExtensionButton => ("toolbar-ext-v", TOOL_BAR_EXT_V_SIZES),
        FileDialogNewFolder => ("newdirectory", STANDARD_SIZES),
        FileDialogDetailedView => ("viewdetailed", STANDARD_SIZES),
        FileDialogInfoView => ("fileinfo", STANDARD_SIZES),
        FileDialogContentsView => ("filecontents", STANDARD_SIZES),
        FileDialogListView => ("viewlist", STANDARD_SIZES),
        DialogOkButton => ("standardbutton-ok", STANDARD_SIZES),
        DialogCancelButton => ("standardbutton-cancel", STANDARD_SIZES),
        DialogHelpButton => ("standardbutton-help", STANDARD_SIZES),
        DialogOpenButton => ("standardbutton-open", STANDARD_SIZES),
        DialogSaveButton => ("standardbutton-save", STANDARD_SIZES),
        DialogCloseButton => ("standardbutton-close", STANDARD_SIZES),
        DialogApplyButton => ("standardbutton-apply", STANDARD_SIZES),
        DialogResetButton => ("standardbutton-clear", STANDARD_SIZES),
        DialogDiscardButton => ("standardbutton-delete", STANDARD_SIZES),
        DialogYesButton => ("standardbutton-yes", STANDARD_SIZES),
        DialogNoButton => ("standardbutton-no", STANDARD_SIZES),
        ArrowLeft => ("left", STANDARD_SIZES),
        ArrowRight => ("right", STANDARD_SIZES),
        ArrowUp => ("up", STANDARD_SIZES),
        ArrowDown => ("down", STANDARD_SIZES),
        DirHomeIcon | DirIcon | DirClosedIcon => ("dirclosed", STANDARD_SIZES),
        DriveCDIcon => ("cdr", STANDARD_SIZES),
        DriveDVDIcon => ("dvd", STANDARD_SIZES),
        FileIcon => ("file", STANDARD_SIZES),
        FileLinkIcon => ("filelink", STANDARD_SIZES),
        TrashIcon => ("trash", STANDARD_SIZES),
        BrowserReload => ("refresh", BROWSER_SIZES),
        BrowserStop => ("stop", BROWSER_SIZES),
        MediaPlay => ("media-play", MEDIA_SIZES),
        MediaPause => ("media-pause", MEDIA_SIZES),
        MediaStop => ("media-stop", MEDIA_SIZES),
        MediaSeekForward => ("media-seek-forward", MEDIA_SIZES),
        MediaSeekBackward => ("media-seek-backward", MEDIA_SIZES),
        MediaSkipForward => ("media-skip-forward", MEDIA_SIZES),
        MediaSkipBackward => ("media-skip-backward", MEDIA_SIZES),
        MediaVolume => ("media-volume", SINGLE_SIZE),
        MediaVolumeMuted => ("media-volume-muted", SINGLE_SIZE),
        LineEditClearButton => ("cleartext", MEDIA_SIZES),
        _ => return None,
    };
    Some(family)
}

/// Bundled resource stem and size of a single-size pixmap.
fn pixmap_resource(sp: StandardPixmap) -> Option<(&'static str, i32)> {
    use StandardPixmap::*;
    let entry = match sp {
        ArrowLeft => ("left", 16),
        ArrowRight => ("right", 16),
        ArrowUp => ("up", 16),
        ArrowDown => ("down", 16),
        FileDialogNewFolder => ("newdirectory", 16),
        FileDialogDetailedView => ("viewdetailed", 16),
        FileDialogInfoView => ("fileinfo", 16),
        FileDialogContentsView => ("filecontents", 16),
        FileDialogListView => ("viewlist", 16),
        DriveHDIcon => ("harddrive", 16),
        TrashIcon => ("trash", 16),
        DriveFDIcon => ("floppy", 16),
        DriveNetIcon => ("networkdrive", 16),
        DesktopIcon => ("desktop", 16),
        ComputerIcon => ("computer", 16),
        DriveCDIcon => ("cdr", 16),
        DriveDVDIcon => ("dvd", 16),
        DirHomeIcon | DirOpenIcon => ("diropen", 16),
        DirIcon | DirClosedIcon => ("dirclosed", 16),
        DirLinkIcon => ("dirlink", 16),
        FileIcon => ("file", 16),
        FileLinkIcon => ("filelink", 16),
        DialogOkButton => ("standardbutton-ok", 16),
        DialogCancelButton => ("standardbutton-cancel", 16),
        DialogHelpButton => ("standardbutton-help", 16),
        DialogOpenButton => ("standardbutton-open", 16),
        DialogSaveButton => ("standardbutton-save", 16),
        DialogCloseButton => ("standardbutton-close", 16),
        DialogApplyButton => ("standardbutton-apply", 16),
        DialogResetButton => ("standardbutton-clear", 16),
        DialogDiscardButton => ("standardbutton-delete", 16),
        DialogYesButton => ("standardbutton-yes", 16),
        DialogNoButton => ("standardbutton-no", 16),
        BrowserReload => ("refresh", 24),
        BrowserStop => ("stop", 24),
        MediaPlay => ("media-play", 32),
        MediaPause => ("media-pause", 32),
        MediaStop => ("media-stop", 32),
        MediaSeekForward => ("media-seek-forward", 32),
        MediaSeekBackward => ("media-seek-backward", 32),
        MediaSkipForward => ("media-skip-forward", 32),
        MediaSkipBackward => ("media-skip-backward", 32),
        MediaVolume => ("media-volume", 16),
        MediaVolumeMuted => ("media-volume-muted", 16),
        LineEditClearButton => ("cleartext", 16),
        _ => return None,
    };
    Some(entry)
}

/// Name of a bundled resource.
pub fn resource_name(stem: &str, size: i32) -> String {
    format!("{RESOURCE_PREFIX}{stem}-{size}.png")
}

impl CommonStyle {
    /// A single-size image for `sp`.
    ///
    /// Ids with no image resolve to an empty picture.
    pub fn standard_pixmap_via(&self, front: &dyn Style, sp: StandardPixmap, opt: Option<&DrawOption>) -> AssetImage {
        let rtl = opt.is_some_and(|o| o.direction.is_rtl());
        let resolved = resolve_direction(sp, rtl);
        if resolved != sp {
            return front.standard_pixmap(resolved, opt);
        }
        if let Some(themed) = self.themed_image(sp, rtl, THEME_PIXMAP_EXTENT) {
            return themed;
        }
        if let Some((stem, size)) = pixmap_resource(sp) {
            return self.bundled_image(&resource_name(stem, size));
        }
        let size = match sp {
            StandardPixmap::MessageBoxInformation
            | StandardPixmap::MessageBoxWarning
            | StandardPixmap::MessageBoxCritical
            | StandardPixmap::MessageBoxQuestion => 32,
            _ => 16,
        };
        match glyph(sp, size, rtl) {
            Some(picture) => AssetImage::Picture(Arc::new(picture)),
            None => {
                log::debug!("standard_pixmap: no image for {:?}", sp);
                AssetImage::Picture(Arc::new(Picture::new()))
            },
        }
    }

    /// A multi-size icon for `sp`.
    ///
    /// Ids with no image resolve to an empty set.
    pub fn standard_icon_via(&self, front: &dyn Style, sp: StandardPixmap, opt: Option<&DrawOption>) -> IconSet {
        let rtl = opt.is_some_and(|o| o.direction.is_rtl());
        let resolved = resolve_direction(sp, rtl);
        if resolved != sp {
            return front.standard_icon(resolved, opt);
        }

        let family = icon_family(sp, rtl);
        let sizes = family.map_or(STANDARD_SIZES, |(_, sizes)| sizes);
        let mut icon = IconSet::new();
        if self.theme_available() {
            for &extent in sizes {
                if let Some(image) = self.themed_image(sp, rtl, extent) {
                    icon.add(extent, image);
                }
            }
            if !icon.is_empty() {
                return icon;
            }
        }

        match family {
            Some((stem, sizes)) => {
                for &extent in sizes {
                    let name = resource_name(stem, extent);
                    let image = match glyph(sp, extent, rtl) {
                        Some(picture) => self.loaded_image(&name).unwrap_or_else(|| AssetImage::Picture(Arc::new(picture))),
                        None => self.bundled_image(&name),
                    };
                    icon.add(extent, image);
                }
            },
            None => {
                let image = front.standard_pixmap(sp, opt);
                let empty = matches!(&image, AssetImage::Picture(p) if p.is_empty());
                if !empty {
                    let extent = image.size().map_or(16, |s| s.width.max(s.height));
                    icon.add(extent, image);
                }
            },
        }
        icon
    }

    fn theme_available(&self) -> bool {
        let platform = self.platform();
        platform.desktop_settings_aware() && platform.icon_theme_name().is_some_and(|name| !name.is_empty())
    }

    /// The theme image for `sp` at `extent`, composites included.
    fn themed_image(&self, sp: StandardPixmap, rtl: bool, extent: i32) -> Option<AssetImage> {
        if !self.theme_available() {
            return None;
        }
        if let Some(base) = link_base(sp) {
            return self.linked_theme_image(sp, base, extent);
        }
        if sp == StandardPixmap::LineEditClearButton {
            let directional = if rtl {
                "edit-clear-locationbar-ltr"
            } else {
                "edit-clear-locationbar-rtl"
            };
            return self.theme_lookup(&[directional, "edit-clear"], extent);
        }
        self.theme_lookup(theme_names(sp), extent)
    }

    fn theme_lookup(&self, names: &[&str], extent: i32) -> Option<AssetImage> {
        for name in names {
            let key = format!("{}:theme:{}:{}", self.name(), name, extent);
            if let Some(hit) = self.pixmap_cache().get(&key) {
                return Some(hit);
            }
            if let Some(path) = self.platform().theme_icon(name, extent.max(1) as u32) {
                log::debug!("Theme icon {} at {} resolved to {}", name, extent, path.display());
                let image = AssetImage::Path(path);
                self.pixmap_cache().insert(key, image.clone());
                return Some(image);
            }
        }
        None
    }

    /// The base theme icon with the symbolic-link emblem in its bottom-right quadrant.
    fn linked_theme_image(&self, sp: StandardPixmap, base: StandardPixmap, extent: i32) -> Option<AssetImage> {
        let key = format!("{}:link:{:?}:{}", self.name(), sp, extent);
        if let Some(hit) = self.pixmap_cache().get(&key) {
            return Some(hit);
        }
        let emblem = self.theme_lookup(&[SYMBOLIC_LINK_EMBLEM], extent / 2)?;
        let base = self.theme_lookup(theme_names(base), extent)?;
        let (AssetImage::Path(base_path), AssetImage::Path(emblem_path)) = (&base, &emblem) else {
            return Some(base);
        };
        let composite = match (load_pixmap(base_path), load_pixmap(emblem_path)) {
            (Ok(base_pixmap), Ok(emblem_pixmap)) => AssetImage::Pixmap(overlay_quadrant(&base_pixmap, &emblem_pixmap)),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Failed to compose link icon {:?}: {}", sp, e);
                return Some(base);
            },
        };
        self.pixmap_cache().insert(key, composite.clone());
        Some(composite)
    }

    /// The decoded resource, if an asset source can provide it.
    fn loaded_image(&self, name: &str) -> Option<AssetImage> {
        let assets = self.assets()?;
        let key = format!("{}:{}", self.name(), name);
        if let Some(hit) = self.pixmap_cache().get(&key) {
            return Some(hit);
        }
        let image = AssetImage::Pixmap(assets.load(name)?);
        self.pixmap_cache().insert(key, image.clone());
        Some(image)
    }

    /// The decoded resource, or its name when nothing can decode it.
    pub(super) fn bundled_image(&self, name: &str) -> AssetImage {
        self.loaded_image(name)
            .unwrap_or_else(|| AssetImage::Resource(name.to_string()))
    }
}

/// Blend `emblem` over the bottom-right quadrant of `base`.
fn overlay_quadrant(base: &Pixmap, emblem: &Pixmap) -> Pixmap {
    let (w, h) = (base.width(), base.height());
    let (ox, oy) = (w / 2, h / 2);
    let (qw, qh) = (w - ox, h - oy);
    let mut data = base.data().to_vec();
    for y in 0..qh {
        for x in 0..qw {
            let sx = x * emblem.width() / qw.max(1);
            let sy = y * emblem.height() / qh.max(1);
            let Some(src) = emblem.pixel(sx, sy) else {
                continue;
            };
            let i = (((oy + y) * w + ox + x) * 4) as usize;
            let alpha = src[3] as u32;
            for c in 0..3 {
                let dst = data[i + c] as u32;
                data[i + c] = ((src[c] as u32 * alpha + dst * (255 - alpha)) / 255) as u8;
            }
            let dst_alpha = data[i + 3] as u32;
            data[i + 3] = (alpha + dst_alpha * (255 - alpha) / 255) as u8;
        }
    }
    Pixmap::from_rgba8(w, h, data).unwrap_or_else(|| base.clone())
}

/// Engine-drawn glyphs for the title bar, message and tool bar ids.
fn glyph(sp: StandardPixmap, size: i32, rtl: bool) -> Option<Picture> {
    use StandardPixmap::*;
    let ink = Brush::Solid(Color::BLACK);
    let pen = Pen::new(Color::BLACK).with_width(2.0);
    let thin = Pen::new(Color::BLACK);
    let white = Brush::Solid(Color::WHITE);
    let p = |x: f64, y: f64| PointF::new(if rtl { GLYPH_GRID - x } else { x }, y);

    let mut pic = Picture::with_size(Size::square(size));
    pic.scale(size as f64 / GLYPH_GRID, size as f64 / GLYPH_GRID);
    match sp {
        TitleBarMinButton => pic.fill_rect(Rect::new(4, 10, 8, 2), &ink),
        TitleBarMaxButton => {
            pic.stroke_rect(Rect::new(3, 3, 10, 10), &thin);
            pic.fill_rect(Rect::new(3, 3, 10, 2), &ink);
        },
        TitleBarNormalButton => {
            pic.stroke_rect(Rect::new(5, 2, 9, 8), &thin);
            pic.fill_rect(Rect::new(5, 2, 9, 2), &ink);
            pic.fill_rect(Rect::new(2, 6, 9, 8), &white);
            pic.stroke_rect(Rect::new(2, 6, 9, 8), &thin);
            pic.fill_rect(Rect::new(2, 6, 9, 2), &ink);
        },
        TitleBarCloseButton | DockWidgetCloseButton => {
            pic.draw_line_f(PointF::new(4.0, 4.0), PointF::new(12.0, 12.0), &pen);
            pic.draw_line_f(PointF::new(12.0, 4.0), PointF::new(4.0, 12.0), &pen);
        },
        TitleBarShadeButton => {
            let tri = [PointF::new(4.0, 10.0), PointF::new(12.0, 10.0), PointF::new(8.0, 5.0)];
            pic.draw_polygon(&tri, None, Some(&ink));
        },
        TitleBarUnshadeButton => {
            let tri = [PointF::new(4.0, 6.0), PointF::new(12.0, 6.0), PointF::new(8.0, 11.0)];
            pic.draw_polygon(&tri, None, Some(&ink));
        },
        TitleBarContextHelpButton => {
            pic.draw_text(Rect::new(0, 0, 16, 16), Alignment::CENTER, "?", Color::BLACK);
        },
        TitleBarMenuButton => {
            pic.stroke_rect(Rect::new(2, 3, 12, 10), &thin);
            pic.fill_rect(Rect::new(2, 3, 12, 3), &ink);
        },
        MessageBoxInformation | MessageBoxQuestion => {
            let blue = Brush::Solid(Color::from_rgba8(0x2a, 0x6f, 0xd6, 0xff));
            pic.draw_ellipse(kurbo::Rect::new(1.0, 1.0, 15.0, 15.0), None, Some(&blue));
            let mark = if sp == MessageBoxInformation { "i" } else { "?" };
            pic.draw_text(Rect::new(0, 0, 16, 16), Alignment::CENTER, mark, Color::WHITE);
        },
        MessageBoxWarning => {
            let amber = Brush::Solid(Color::from_rgba8(0xf0, 0xc0, 0x20, 0xff));
            let tri = [PointF::new(8.0, 1.0), PointF::new(15.0, 15.0), PointF::new(1.0, 15.0)];
            pic.draw_polygon(&tri, Some(&thin), Some(&amber));
            pic.draw_text(Rect::new(0, 4, 16, 12), Alignment::CENTER, "!", Color::BLACK);
        },
        MessageBoxCritical => {
            let red = Brush::Solid(Color::from_rgba8(0xd0, 0x20, 0x20, 0xff));
            let cross = Pen::new(Color::WHITE).with_width(2.0);
            pic.draw_ellipse(kurbo::Rect::new(1.0, 1.0, 15.0, 15.0), None, Some(&red));
            pic.draw_line_f(PointF::new(5.0, 5.0), PointF::new(11.0, 11.0), &cross);
            pic.draw_line_f(PointF::new(11.0, 5.0), PointF::new(5.0, 11.0), &cross);
        },
        ToolBarHorizontalExtensionButton => {
            for x in [3.0, 8.0] {
                pic.draw_line_f(p(x, 4.0), p(x + 3.0, 8.0), &thin);
                pic.draw_line_f(p(x + 3.0, 8.0), p(x, 12.0), &thin);
            }
        },
        ToolBarVerticalExtensionButton => {
            for y in [3.0, 8.0] {
                pic.draw_line_f(PointF::new(4.0, y), PointF::new(8.0, y + 3.0), &thin);
                pic.draw_line_f(PointF::new(8.0, y + 3.0), PointF::new(12.0, y), &thin);
            }
        },
        FileDialogStart | FileDialogEnd => {
            let at_start = sp == FileDialogStart;
            let bar_x = if at_start { 3 } else { 11 };
            pic.fill_rect(Rect::new(bar_x, 3, 2, 10), &ink);
            let (tip, back) = if at_start { (6.0, 12.0) } else { (10.0, 4.0) };
            let tri = [PointF::new(tip, 8.0), PointF::new(back, 3.0), PointF::new(back, 13.0)];
            pic.draw_polygon(&tri, None, Some(&ink));
        },
        _ => return None,
    }
    Some(pic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetSource, DirAssetSource};
    use crate::geometry::Direction;
    use lookfeel_theme::PlatformTheme;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// A bridge resolving theme icons from a fixed table.
    struct TableTheme {
        icons: HashMap<&'static str, PathBuf>,
        aware: bool,
    }

    impl PlatformTheme for TableTheme {
        fn desktop_settings_aware(&self) -> bool {
            self.aware
        }

        fn icon_theme_name(&self) -> Option<String> {
            Some("table".into())
        }

        fn theme_icon(&self, name: &str, _size: u32) -> Option<PathBuf> {
            self.icons.get(name).cloned()
        }
    }

    fn themed(icons: &[(&'static str, PathBuf)], aware: bool) -> CommonStyle {
        CommonStyle::new().with_platform(Arc::new(TableTheme {
            icons: icons.iter().cloned().collect(),
            aware,
        }))
    }

    fn rtl() -> DrawOption {
        DrawOption::default().with_direction(Direction::RightToLeft)
    }

    #[test]
    fn test_bundled_pixmap_names() {
        let style = CommonStyle::new();
        assert_eq!(
            style.standard_pixmap(StandardPixmap::FileIcon, None),
            AssetImage::Resource(":/lookfeel/common/file-16.png".into())
        );
        assert_eq!(
            style.standard_pixmap(StandardPixmap::BrowserReload, None),
            AssetImage::Resource(":/lookfeel/common/refresh-24.png".into())
        );
    }

    #[test]
    fn test_directional_ids_resolve_first() {
        let style = CommonStyle::new();
        let right = style.standard_pixmap(StandardPixmap::ArrowRight, None);
        let left = style.standard_pixmap(StandardPixmap::ArrowLeft, None);
        assert_eq!(style.standard_pixmap(StandardPixmap::ArrowBack, None), left);
        assert_eq!(style.standard_pixmap(StandardPixmap::ArrowBack, Some(&rtl())), right);
        assert_eq!(style.standard_pixmap(StandardPixmap::ArrowForward, Some(&rtl())), left);
        assert_eq!(style.standard_pixmap(StandardPixmap::FileDialogBack, None), left);
        assert_eq!(
            style.standard_pixmap(StandardPixmap::FileDialogToParent, None),
            style.standard_pixmap(StandardPixmap::ArrowUp, None)
        );
    }

    #[test]
    fn test_title_bar_icons_fall_back_to_glyphs() {
        let style = CommonStyle::new();
        let close = style.standard_icon(StandardPixmap::TitleBarCloseButton, None);
        assert_eq!(close.sizes(), DOCK_TITLE_SIZES.to_vec());
        for (extent, image) in close.iter() {
            match image {
                AssetImage::Picture(p) => {
                    assert_eq!(p.size(), Size::square(extent));
                    assert!(!p.is_empty());
                },
                other => panic!("expected a glyph, got {other:?}"),
            }
        }
        assert_eq!(style.standard_icon(StandardPixmap::TitleBarMinButton, None).sizes(), vec![16, 32, 48]);
    }

    #[test]
    fn test_icon_size_lists() {
        let style = CommonStyle::new();
        let sizes = |sp| style.standard_icon(sp, None).sizes();
        assert_eq!(sizes(StandardPixmap::DialogOkButton), vec![16, 32, 128]);
        assert_eq!(sizes(StandardPixmap::ToolBarHorizontalExtensionButton), vec![8, 16, 32]);
        assert_eq!(sizes(StandardPixmap::ToolBarVerticalExtensionButton), vec![5, 10, 20]);
        assert_eq!(sizes(StandardPixmap::MediaPlay), vec![16, 32]);
        let ext = style.standard_icon(StandardPixmap::ToolBarHorizontalExtensionButton, Some(&rtl()));
        assert_eq!(ext.best(8), Some(&AssetImage::Resource(":/lookfeel/common/toolbar-ext-h-rtl-8.png".into())));
    }

    #[test]
    fn test_unknown_ids_are_empty() {
        let style = CommonStyle::new();
        assert!(style.standard_icon(StandardPixmap::VistaShield, None).is_empty());
        match style.standard_pixmap(StandardPixmap::VistaShield, None) {
            AssetImage::Picture(p) => assert!(p.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_message_box_pixmap_is_a_glyph() {
        let style = CommonStyle::new();
        let image = style.standard_pixmap(StandardPixmap::MessageBoxWarning, None);
        assert_eq!(image.size(), Some(Size::square(32)));
        let icon = style.standard_icon(StandardPixmap::MessageBoxWarning, None);
        assert_eq!(icon.sizes(), vec![32]);
    }

    #[test]
    fn test_theme_icons_win_and_are_cached() {
        let style = themed(&[("text-x-generic", PathBuf::from("/icons/file.png"))], true);
        assert_eq!(
            style.standard_pixmap(StandardPixmap::FileIcon, None),
            AssetImage::Path(PathBuf::from("/icons/file.png"))
        );
        assert!(!style.pixmap_cache().is_empty());
        let icon = style.standard_icon(StandardPixmap::FileIcon, None);
        assert_eq!(icon.sizes(), vec![16, 32, 128]);

        let unaware = themed(&[("text-x-generic", PathBuf::from("/icons/file.png"))], false);
        assert!(matches!(
            unaware.standard_pixmap(StandardPixmap::FileIcon, None),
            AssetImage::Resource(_)
        ));
    }

    #[test]
    fn test_theme_fallback_names() {
        let style = themed(&[("process-stop", PathBuf::from("/icons/stop.png"))], true);
        assert_eq!(
            style.standard_pixmap(StandardPixmap::DialogCancelButton, None),
            AssetImage::Path(PathBuf::from("/icons/stop.png"))
        );
    }

    #[test]
    fn test_clear_button_theme_name_depends_on_direction() {
        let style = themed(
            &[
                ("edit-clear-locationbar-rtl", PathBuf::from("/icons/clear-rtl.png")),
                ("edit-clear-locationbar-ltr", PathBuf::from("/icons/clear-ltr.png")),
            ],
            true,
        );
        assert_eq!(
            style.standard_pixmap(StandardPixmap::LineEditClearButton, None),
            AssetImage::Path(PathBuf::from("/icons/clear-rtl.png"))
        );
        assert_eq!(
            style.standard_pixmap(StandardPixmap::LineEditClearButton, Some(&rtl())),
            AssetImage::Path(PathBuf::from("/icons/clear-ltr.png"))
        );
    }

    #[test]
    fn test_link_icons_are_composited() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("file.png");
        let emblem = dir.path().join("link.png");
        image::RgbaImage::from_pixel(16, 16, image::Rgba([255, 255, 255, 255])).save(&base).unwrap();
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 255, 255])).save(&emblem).unwrap();

        let style = themed(&[("text-x-generic", base), (SYMBOLIC_LINK_EMBLEM, emblem)], true);
        let AssetImage::Pixmap(pixmap) = style.standard_pixmap(StandardPixmap::FileLinkIcon, None) else {
            panic!("expected a composited pixmap");
        };
        assert_eq!(pixmap.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(pixmap.pixel(12, 12), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_asset_source_decodes_bundled_images() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("lookfeel/common");
        std::fs::create_dir_all(&images).unwrap();
        image::RgbaImage::from_pixel(16, 16, image::Rgba([1, 2, 3, 255]))
            .save(images.join("closedock-16.png"))
            .unwrap();

        let source: Arc<dyn AssetSource> = Arc::new(DirAssetSource::new(dir.path()));
        let style = CommonStyle::new().with_assets(source);
        let icon = style.standard_icon(StandardPixmap::TitleBarCloseButton, None);
        assert!(matches!(icon.best(16), Some(AssetImage::Pixmap(_))));
        assert!(matches!(icon.best(32), Some(AssetImage::Picture(_))));
    }

    #[test]
    fn test_overrides_see_resolved_ids() {
        struct Marked(CommonStyle);
        impl Style for Marked {
            fn base(&self) -> &CommonStyle {
                &self.0
            }
            fn front(&self) -> &dyn Style {
                self
            }
            fn standard_pixmap(&self, sp: StandardPixmap, opt: Option<&DrawOption>) -> AssetImage {
                match sp {
                    StandardPixmap::ArrowLeft => AssetImage::Resource("custom-left".into()),
                    _ => self.base().standard_pixmap_via(self, sp, opt),
                }
            }
        }
        let style = Marked(CommonStyle::new());
        assert_eq!(
            style.standard_pixmap(StandardPixmap::ArrowBack, None),
            AssetImage::Resource("custom-left".into())
        );
    }
}
