// Copyright 2021-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


pub mod errors;
pub mod options;
pub mod ballot;
pub mod round_result;
pub mod tie_resolution;
pub mod random_util;
pub mod rank_choice_counter;
pub mod transcript;
pub mod election_data;
