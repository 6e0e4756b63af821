//! Fixed UI strings in both supported locales.

use crate::model::Locale;

/// Every piece of UI text the quiz shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Title,
    Selected,
    Score,
    Answer,
    Back,
    CheckIncorrect,
    PenaltyNotice,
    Unselected,
    NonExistentSelected,
    ItemsSuffix,
    SpecLink,
    ReferenceLink,
    MarkOk,
    MarkMissed,
    MarkNotElement,
    HelpHint,
    HelpHeading,
    HelpToggle,
    HelpList,
    HelpShowHelp,
    HelpQuit,
    AnswersLocked,
    AnswerFirst,
    UnknownItem,
    NoItemAt,
    ErrorPrefix,
    FinalScore,
    Policy,
    StrictPolicy,
    LenientPolicy,
}

impl Message {
    pub const ALL: [Message; 30] = [
        Message::Title,
        Message::Selected,
        Message::Score,
        Message::Answer,
        Message::Back,
        Message::CheckIncorrect,
        Message::PenaltyNotice,
        Message::Unselected,
        Message::NonExistentSelected,
        Message::ItemsSuffix,
        Message::SpecLink,
        Message::ReferenceLink,
        Message::MarkOk,
        Message::MarkMissed,
        Message::MarkNotElement,
        Message::HelpHint,
        Message::HelpHeading,
        Message::HelpToggle,
        Message::HelpList,
        Message::HelpShowHelp,
        Message::HelpQuit,
        Message::AnswersLocked,
        Message::AnswerFirst,
        Message::UnknownItem,
        Message::NoItemAt,
        Message::ErrorPrefix,
        Message::FinalScore,
        Message::Policy,
        Message::StrictPolicy,
        Message::LenientPolicy,
    ];

    /// `(ja, en)` pair for this message.
    pub fn pair(self) -> (&'static str, &'static str) {
        match self {
            Message::Title => (
                "実在するhtml要素を全部選んでください.com",
                "select-all-html.com",
            ),
            Message::Selected => ("選択", "Selected"),
            Message::Score => ("スコア", "Score"),
            Message::Answer => ("回答する", "Answer"),
            Message::Back => ("選択に戻る", "Back"),
            Message::CheckIncorrect => ("間違いを確認", "Check incorrect"),
            Message::PenaltyNotice => (
                "※実在しない要素を選択すると減点されます。",
                "* You will be penalized if you select a non-existent element.",
            ),
            Message::Unselected => ("未選択", "Unselected"),
            Message::NonExistentSelected => ("非実在選択", "Non-existent selected"),
            Message::ItemsSuffix => ("個", " items"),
            Message::SpecLink => ("仕様書", "spec"),
            Message::ReferenceLink => ("mdn", "mdn"),
            Message::MarkOk => ("正解", "ok"),
            Message::MarkMissed => ("見逃し", "missed"),
            Message::MarkNotElement => ("実在しない要素", "not an element"),
            Message::HelpHint => (
                "':help' でコマンド一覧を表示します。",
                "Type ':help' for commands.",
            ),
            Message::HelpHeading => ("コマンド:", "Commands:"),
            Message::HelpToggle => (
                "番号か名前で選択を切り替え (選択中のみ)",
                "toggle an item (while choosing)",
            ),
            Message::HelpList => ("現在の画面を再表示", "show the current view again"),
            Message::HelpShowHelp => ("このヘルプを表示", "show this help"),
            Message::HelpQuit => ("終了", "leave"),
            Message::AnswersLocked => (
                "回答済みです。変更するには ':back' を入力してください。",
                "Answers are locked; type ':back' to change them.",
            ),
            Message::AnswerFirst => (
                "間違いを確認する前に回答してください。",
                "Answer before checking incorrect items.",
            ),
            Message::UnknownItem => ("該当する項目がありません", "Unknown item"),
            Message::NoItemAt => ("その位置に項目はありません", "No item at position"),
            Message::ErrorPrefix => ("エラー", "Error"),
            Message::FinalScore => ("最終スコア", "Final score"),
            Message::Policy => ("採点方式", "policy"),
            Message::StrictPolicy => ("減点あり", "strict policy"),
            Message::LenientPolicy => ("減点なし", "lenient policy"),
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        let (ja, en) = self.pair();
        match locale {
            Locale::Ja => ja,
            Locale::En => en,
        }
    }
}
