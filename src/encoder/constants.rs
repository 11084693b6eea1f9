/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Field-width bounds used when range-checking resolved operand values.

pub const BYTE_MAX: u32 = 0xFF;
pub const WORD_MAX: u32 = 0xFFFF;
pub const DWORD_MAX: u32 = 0xFFFF_FFFF;

pub const RELATIVE_MIN: i32 = -128;
pub const RELATIVE_MAX: i32 = 127;
