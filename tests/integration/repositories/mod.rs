// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod book_repository_test;
pub mod catalog_repository_test;
pub mod creator_repository_test;
pub mod engine_check_test;
pub mod event_repository_test;
pub mod isbn_repository_test;
pub mod publisher_repository_test;
