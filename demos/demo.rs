// SPDX-License-Identifier: MPL-2.0
//! Minimal application showing the toast view in context.
//!
//! Run with `cargo run --example demo`. Each button shows a toast of the
//! matching category; the card dismisses on click, via its close control,
//! or when the countdown runs out.

use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toast::{Category, Event, Toast, ToastView};
use std::time::Duration;

pub fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(|_: &App| String::from("iced_toast demo"))
        .theme(|_: &App| Theme::Dark)
        .subscription(App::subscription)
        .run()
}

#[derive(Default)]
struct App {
    toasts: ToastView,
    dismissed: usize,
}

#[derive(Debug, Clone)]
enum Message {
    Show(Category),
    Toast(iced_toast::Message),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(category) => {
                self.toasts.show(sample_toast(category));
            }
            Message::Toast(message) => {
                if let Some(Event::Dismissed) = self.toasts.update(message) {
                    self.dismissed += 1;
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = Row::new()
            .spacing(8)
            .push(show_button("Success", Category::Success))
            .push(show_button("Error", Category::Error))
            .push(show_button("Warning", Category::Warning))
            .push(show_button("Info", Category::Info));

        let page = Container::new(
            Column::new()
                .spacing(16)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(format!("Dismissed so far: {}", self.dismissed)))
                .push(buttons),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(page)
            .push(self.toasts.view().map(Message::Toast))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }
}

fn show_button(label: &str, category: Category) -> Element<'_, Message> {
    button(Text::new(label))
        .on_press(Message::Show(category))
        .into()
}

fn sample_toast(category: Category) -> Toast {
    match category {
        Category::Success => Toast::success("Image saved"),
        Category::Error => Toast::error("Save failed")
            .with_message("Permission denied.")
            .with_duration(Duration::from_secs(8)),
        Category::Warning => Toast::warning("Disk almost full")
            .with_message("Less than 1 GB remaining."),
        Category::Info => Toast::info("Update available")
            .with_duration(Duration::from_secs(2)),
        Category::Unknown => Toast::new(category, "Something happened"),
    }
}
