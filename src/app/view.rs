// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::{FormFlow, FormSubmission};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery_editor::{self, ViewContext as EditorViewContext};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a gallery_editor::State,
    pub last_submission: Option<&'a FormSubmission>,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let flow_key = match ctx.editor.flow() {
        FormFlow::Create => "form-flow-create",
        FormFlow::Edit => "form-flow-edit",
    };

    let mut column = Column::new().spacing(spacing::MD).padding(spacing::MD);

    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }

    column = column
        .push(Text::new(ctx.i18n.tr(flow_key)).size(typography::TITLE_MD))
        .push(
            ctx.editor
                .view(&EditorViewContext { i18n: ctx.i18n })
                .map(Message::Editor),
        )
        .push(
            button(Text::new(ctx.i18n.tr("form-submit")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Submit),
        );

    if let Some(submission) = ctx.last_submission {
        column = column.push(submission_summary(ctx.i18n, submission));
    }

    Container::new(scrollable(column.width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("×").size(typography::BODY))
                    .style(styles::button::tile_remove)
                    .on_press(Message::DismissWarning),
            )
            .align_y(Alignment::Center),
    )
    .padding(spacing::SM)
    .style(styles::container::panel)
    .width(Length::Fill)
    .into()
}

fn submission_summary<'a>(i18n: &I18n, submission: &FormSubmission) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .push(Text::new(i18n.tr("form-field-label")).size(typography::CAPTION))
            .push(Text::new(submission.images_field.clone()).size(typography::BODY))
            .push(
                Text::new(i18n.tr_count("form-uploads", "count", submission.uploads.len()))
                    .size(typography::CAPTION),
            )
            .spacing(spacing::XXS),
    )
    .padding(spacing::SM)
    .style(styles::container::panel)
    .width(Length::Fill)
    .into()
}
