//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    GoToParent,
    EnterSelected,
    TogglePanel,
    Refresh,
    GoToPath,
    SelectRoot,
    // File Operations
    CopyToOther,
    MoveToOther,
    Delete,
    CreateFile,
    MakeDirectory,
    // Filter
    StartFilter,
    ClearFilter,
    // System
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의
pub struct ActionDef {
    pub action: Action,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveDown,
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::GoToTop,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToParent,
        command_bar: Some(CommandBarEntry {
            key: "h/l",
            label: "Nav",
            priority: 51,
        }),
    },
    ActionDef {
        action: Action::EnterSelected,
        command_bar: None,
    },
    ActionDef {
        action: Action::TogglePanel,
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Panel",
            priority: 52,
        }),
    },
    ActionDef {
        action: Action::Refresh,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToPath,
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectRoot,
        command_bar: None,
    },
    // File Operations
    ActionDef {
        action: Action::CopyToOther,
        command_bar: Some(CommandBarEntry {
            key: "y",
            label: "Copy",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::MoveToOther,
        command_bar: Some(CommandBarEntry {
            key: "x",
            label: "Move",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::Delete,
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Del",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::CreateFile,
        command_bar: Some(CommandBarEntry {
            key: "n",
            label: "NewFile",
            priority: 13,
        }),
    },
    ActionDef {
        action: Action::MakeDirectory,
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "MkDir",
            priority: 14,
        }),
    },
    // Filter
    ActionDef {
        action: Action::StartFilter,
        command_bar: Some(CommandBarEntry {
            key: "f",
            label: "Filter",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::ClearFilter,
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::Quit,
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::Char('g'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::Char('G'),
            modifiers: Some(KeyModifiers::SHIFT),
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: None,
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Char('h'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Backspace,
            modifiers: None,
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Right,
            modifiers: None,
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::TogglePanel,
        },
        KeyBinding {
            code: KeyCode::Char('r'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::F(5),
            modifiers: None,
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::Char('p'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToPath,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::SelectRoot,
        },
        // File Operations
        KeyBinding {
            code: KeyCode::Char('y'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::CopyToOther,
        },
        KeyBinding {
            code: KeyCode::Char('x'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveToOther,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Delete,
        },
        KeyBinding {
            code: KeyCode::Char('n'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::CreateFile,
        },
        KeyBinding {
            code: KeyCode::Char('a'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MakeDirectory,
        },
        // Filter
        KeyBinding {
            code: KeyCode::Char('f'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::StartFilter,
        },
        KeyBinding {
            code: KeyCode::Char('F'),
            modifiers: Some(KeyModifiers::SHIFT),
            action: Action::ClearFilter,
        },
        // System
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}
